use crate::{ensure_exist, ensure_ok, infrastructure::repo_activity::ActivityStore};

use super::Email;

#[derive(Debug, derive_more::Display, PartialEq, Eq)]
pub enum SignupErr {
    NotFound,
    AlreadySignedUp,
}

pub fn signup(repo: &ActivityStore, activity: &str, email: Email) -> Result<(), SignupErr> {
    let enrolled = ensure_exist!(
        repo.modify(activity, |a| a.enroll(email)),
        SignupErr::NotFound
    );
    ensure_ok!(enrolled, SignupErr::AlreadySignedUp);
    Ok(())
}

#[derive(Debug, derive_more::Display, PartialEq, Eq)]
pub enum UnregisterErr {
    NotFound,
    NotSignedUp,
}

pub fn unregister(repo: &ActivityStore, activity: &str, email: &Email) -> Result<(), UnregisterErr> {
    let withdrawn = ensure_exist!(
        repo.modify(activity, |a| a.withdraw(email)),
        UnregisterErr::NotFound
    );
    ensure_ok!(withdrawn, UnregisterErr::NotSignedUp);
    Ok(())
}
