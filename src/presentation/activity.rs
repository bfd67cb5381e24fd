use actix_web::web::{self, Data, Json, Path, Query};

use crate::{
    application::activity::{self, ParticipantDto},
    biz_code,
    domain::activity::service::{SignupErr, UnregisterErr},
    http::{ApiError, ApiResponse, JsonResponse},
    infrastructure::repo_activity::{Activities, ActivityStore},
};

biz_code! {
    mod = "activity";
    index = 10;

    Signup {
        not_found = "Activity not found",
        already_signed_up = "Student is already signed up for this activity",
    }

    Unregister {
        not_found = "Activity not found",
        not_signed_up = "Student is not signed up for this activity",
    }
}

impl From<SignupErr> for ApiError {
    fn from(value: SignupErr) -> Self {
        match value {
            SignupErr::NotFound => SIGNUP.not_found.into(),
            SignupErr::AlreadySignedUp => SIGNUP.already_signed_up.into(),
        }
    }
}

impl From<UnregisterErr> for ApiError {
    fn from(value: UnregisterErr) -> Self {
        match value {
            UnregisterErr::NotFound => UNREGISTER.not_found.into(),
            UnregisterErr::NotSignedUp => UNREGISTER.not_signed_up.into(),
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/activities").route(web::get().to(list_activities)))
        .service(web::resource("/api/activities").route(web::get().to(list_activities)))
        .service(
            web::scope("/activities/{name}")
                .service(web::resource("/signup").route(web::post().to(signup)))
                .service(web::resource("/unregister").route(web::post().to(unregister))),
        );
}

pub async fn list_activities(repo: Data<ActivityStore>) -> Json<Activities> {
    Json(activity::list_activities(&repo))
}

pub async fn signup(
    repo: Data<ActivityStore>,
    name: Path<String>,
    params: Query<ParticipantDto>,
) -> JsonResponse<ApiResponse> {
    let msg = activity::signup(&repo, &name, params.into_inner())?;
    ApiResponse::message(msg)
}

pub async fn unregister(
    repo: Data<ActivityStore>,
    name: Path<String>,
    params: Query<ParticipantDto>,
) -> JsonResponse<ApiResponse> {
    let msg = activity::unregister(&repo, &name, params.into_inner())?;
    ApiResponse::message(msg)
}
