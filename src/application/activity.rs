use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    domain::activity::{
        service::{self, SignupErr, UnregisterErr},
        Email,
    },
    infrastructure::repo_activity::{Activities, ActivityStore},
};

pub fn list_activities(repo: &ActivityStore) -> Activities {
    repo.snapshot()
}

#[derive(Deserialize, Debug)]
pub struct ParticipantDto {
    pub email: String,
}

pub fn signup(repo: &ActivityStore, activity: &str, dto: ParticipantDto) -> Result<String, SignupErr> {
    let email = Email::from(dto.email);
    if let Err(err) = service::signup(repo, activity, email.clone()) {
        warn!(?err, activity, %email, "signup rejected");
        return Err(err);
    }

    info!(activity, %email, "signed up");
    Ok(format!("Signed up {email} for {activity}"))
}

pub fn unregister(
    repo: &ActivityStore,
    activity: &str,
    dto: ParticipantDto,
) -> Result<String, UnregisterErr> {
    let email = Email::from(dto.email);
    if let Err(err) = service::unregister(repo, activity, &email) {
        warn!(?err, activity, %email, "unregister rejected");
        return Err(err);
    }

    info!(activity, %email, "unregistered");
    Ok(format!("Unregistered {email} from {activity}"))
}
