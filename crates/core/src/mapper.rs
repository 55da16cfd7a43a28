//! Projection of raw provider records into the public profile shape

use crate::types::{Profile, RawRecord, PLACEHOLDER_AVATAR};

/// Project a raw record into a [`Profile`]
///
/// Never fails: every missing field has a defined default. The id falls
/// back to the username, the bio to "", and the picture to the HD avatar,
/// then the standard avatar, then a placeholder path.
pub fn project(record: &RawRecord) -> Profile {
    let username = record.username.clone().unwrap_or_default();

    Profile {
        id: record.id.clone().unwrap_or_else(|| username.clone()),
        username,
        bio: record.bio.clone().unwrap_or_default(),
        profile_picture: record
            .avatar_hd
            .clone()
            .or_else(|| record.avatar.clone())
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
    }
}
