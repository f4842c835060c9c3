/// 响应信封中的业务错误码
///
/// 0 表示成功；1xxx 为通用错误，2xxx 起按实体划分，5xxx 为服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    ValidationFailed = 1001,
    InvalidReference = 1002,

    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserCreationFailed = 2003,
    UserUpdateFailed = 2004,
    UserDeleteFailed = 2005,

    GroupNotFound = 3001,
    GroupAlreadyExists = 3002,
    GroupCreationFailed = 3003,
    GroupUpdateFailed = 3004,
    GroupDeleteFailed = 3005,

    HomeworkNotFound = 4001,
    HomeworkCreationFailed = 4003,
    HomeworkUpdateFailed = 4004,
    HomeworkDeleteFailed = 4005,

    AttachmentNotFound = 6001,
    AttachmentCreationFailed = 6003,
    AttachmentUpdateFailed = 6004,
    AttachmentDeleteFailed = 6005,

    UserGroupNotFound = 7001,
    UserGroupAlreadyExists = 7002,
    UserGroupCreationFailed = 7003,
    UserGroupUpdateFailed = 7004,
    UserGroupDeleteFailed = 7005,

    InternalServerError = 5000,
}
