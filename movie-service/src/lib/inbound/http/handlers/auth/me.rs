use super::UserData;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiSuccess;

pub async fn me(current_user: CurrentUser) -> ApiSuccess<UserData> {
    ApiSuccess::ok((&current_user).into())
}
