use serde::{Deserialize, Serialize};

/// A user record as the remote collection returns it: numeric id plus an
/// attribute bag, with relations nested one envelope deeper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: u64,
    pub attributes: UserAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAttributes {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub profile: Option<ProfileRelation>,
    #[serde(default)]
    pub following: RelationList,
    #[serde(default)]
    pub followers: RelationList,
}

impl UserAttributes {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn profile_url(&self) -> Option<&str> {
        profile_url(self.profile.as_ref())
    }
}

/// Related users come back as summary records: id and attributes, no
/// recursive relation expansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RelationList {
    #[serde(default)]
    pub data: Vec<RelatedUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedUser {
    pub id: u64,
    pub attributes: RelatedAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedAttributes {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub profile: Option<ProfileRelation>,
}

impl RelatedAttributes {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn profile_url(&self) -> Option<&str> {
        profile_url(self.profile.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileRelation {
    #[serde(default)]
    pub data: Option<ProfileRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    pub attributes: ProfileAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileAttributes {
    #[serde(default)]
    pub formats: ImageFormats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageFormats {
    #[serde(default)]
    pub url: Option<String>,
}

fn profile_url(profile: Option<&ProfileRelation>) -> Option<&str> {
    profile?.data.as_ref()?.attributes.formats.url.as_deref()
}
