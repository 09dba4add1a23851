use actix_web::HttpResponse;

use crate::dto::auth::{AccountView, MemberDataResponse};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/member-data
///
/// Only reachable through `JwtAuth`.
pub async fn member_data(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MemberDataResponse {
        message: "If you see this, you're in!".to_string(),
        user: AccountView::from(&auth.account),
    })
}
