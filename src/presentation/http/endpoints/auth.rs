use std::sync::Arc;

use poem::{Result as PoemResult, http::StatusCode};
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::services::jwt::JwtService,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::LoginRequestDto,
        responses::AuthResponseDto,
    },
};

pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    #[oai(path = "/auth/login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn login(&self, request: Json<LoginRequestDto>) -> PoemResult<Json<AuthResponseDto>> {
        if request.email != self.state.admin.email || request.password != self.state.admin.password
        {
            return Err(poem::Error::from_string(
                "invalid credentials",
                StatusCode::UNAUTHORIZED,
            ));
        }

        let service = JwtService::new(self.state.jwt_config.clone());
        let token = service.issue(&request.email).map_err(|err| {
            poem::Error::from_string(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
        })?;

        Ok(Json(AuthResponseDto { token }))
    }
}
