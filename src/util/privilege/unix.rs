use super::{evaluate_identity, IdentityLookup};
use crate::error::UserError;
use nix::errno::Errno;
use nix::unistd::{Uid, User};
use tracing::debug;

/// Succeeds when the current user is `root`.
pub fn is_privileged() -> Result<(), UserError> {
    let uid = Uid::current();
    let lookup = match User::from_uid(uid) {
        Ok(Some(user)) => IdentityLookup::Found(user.name),
        Ok(None) => IdentityLookup::Missing { uid: uid.as_raw() },
        Err(Errno::ENOSYS) => IdentityLookup::Unavailable,
        Err(err) => IdentityLookup::Failed(err.to_string()),
    };
    debug!(uid = uid.as_raw(), ?lookup, "resolved current user");
    evaluate_identity(lookup, cfg!(target_os = "macos"))
}
