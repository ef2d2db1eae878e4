// Copyright (c) 2019-2024 Dropbox, Inc.

//! Types of the `users` namespace: account information and space usage.

use serde::{Deserialize, Serialize};
use crate::types::common::RootInfo;
use crate::types::team_common::TeamMemberId;
use crate::types::users_common::{AccountId, AccountType};

/// Representations for a person's name to assist with internationalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct Name {
    /// Also known as a first name.
    pub given_name: String,
    /// Also known as a last name or family name.
    pub surname: String,
    /// Locale-dependent name. In the US, a person's familiar name is their `given_name`, but
    /// elsewhere, it could be any combination of a person's `given_name` and `surname`.
    pub familiar_name: String,
    /// A name that can be used directly to represent the name of a user's Dropbox account.
    pub display_name: String,
    /// An abbreviated form of the person's name. Their initials in most locales.
    pub abbreviated_name: String,
}

impl Name {
    pub fn new(
        given_name: String,
        surname: String,
        familiar_name: String,
        display_name: String,
        abbreviated_name: String,
    ) -> Self {
        Name { given_name, surname, familiar_name, display_name, abbreviated_name }
    }
}

/// Information about a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct Team {
    /// The team's unique ID.
    pub id: String,
    /// The name of the team.
    pub name: String,
}

impl Team {
    pub fn new(id: String, name: String) -> Self {
        Team { id, name }
    }
}

/// Detailed information about a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FullTeam {
    pub id: String,
    pub name: String,
    /// Team policies governing sharing.
    pub sharing_policies: crate::types::team_policies::TeamSharingPolicies,
    /// Team policy governing the use of the Office Add-In.
    pub office_addin_policy: crate::types::team_policies::OfficeAddInPolicy,
}

/// Basic information about any account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct BasicAccount {
    /// The user's unique Dropbox ID.
    pub account_id: AccountId,
    /// Details of a user's name.
    pub name: Name,
    /// The user's email address. Do not rely on this without checking the `email_verified`
    /// field. Even then, it's possible that the user has since lost access to their email.
    pub email: String,
    /// Whether the user has verified their email address.
    pub email_verified: bool,
    /// Whether the user has been disabled.
    pub disabled: bool,
    /// Whether this user is a teammate of the current user. If this account is the current user's
    /// account, then this will be `true`.
    pub is_teammate: bool,
    /// URL for the photo representing the user, if one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// The user's unique team member id. This field will only be present if the user is part of a
    /// team and `is_teammate` is `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
}

/// Detailed information about the current user's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct FullAccount {
    pub account_id: AccountId,
    pub name: Name,
    pub email: String,
    pub email_verified: bool,
    pub disabled: bool,
    /// The language that the user specified. Locale tags will be IETF language tags.
    pub locale: String,
    /// The user's referral link.
    pub referral_link: String,
    /// Whether the user has a personal and work account. If the current account is personal, then
    /// `team` will always be `None`, but `is_paired` will indicate if a work account is linked.
    pub is_paired: bool,
    /// What type of account this user has.
    pub account_type: AccountType,
    /// The root info for this account.
    pub root_info: RootInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// The user's two-letter country code, if available. Country codes are based on ISO 3166-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// If this account is a member of a team, information about that team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<FullTeam>,
    /// This account's unique team member id. This field will only be present if `team` is
    /// present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<TeamMemberId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetAccountArg {
    /// A user's account identifier.
    pub account_id: AccountId,
}

impl GetAccountArg {
    pub fn new(account_id: AccountId) -> Self {
        GetAccountArg { account_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct GetAccountBatchArg {
    /// List of user account identifiers. Should not contain any duplicate account IDs.
    pub account_ids: Vec<AccountId>,
}

impl GetAccountBatchArg {
    pub fn new(account_ids: Vec<AccountId>) -> Self {
        GetAccountBatchArg { account_ids }
    }
}

tagged_union! {
    pub enum GetAccountError: open {
        /// The specified `GetAccountArg::account_id` does not exist.
        NoAccount = "no_account",
    }
}

tagged_union! {
    pub enum GetAccountBatchError: open {
        /// The value is an account ID specified in `GetAccountBatchArg::account_ids` that does not
        /// exist.
        NoAccount(AccountId) = "no_account",
    }
}

/// Information about a user's space usage and quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct SpaceUsage {
    /// The user's total space usage (bytes).
    pub used: u64,
    /// The user's space allocation.
    pub allocation: SpaceAllocation,
}

tagged_union! {
    /// Space is allocated differently based on the type of account.
    pub enum SpaceAllocation: open {
        /// The user's space allocation applies only to their individual account.
        Individual{IndividualSpaceAllocation} = "individual",
        /// The user shares space with other members of their team.
        Team{TeamSpaceAllocation} = "team",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct IndividualSpaceAllocation {
    /// The total space allocated to the user's account (bytes).
    pub allocated: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct TeamSpaceAllocation {
    /// The total space currently used by the user's team (bytes).
    pub used: u64,
    /// The total space allocated to the user's team (bytes).
    pub allocated: u64,
    /// The total space allocated to the user within its team allocated space (0 means that no
    /// restriction is imposed on the user's quota within its team).
    pub user_within_team_space_allocated: u64,
    /// The type of the space limit imposed on the team member (off, alert_only, stop_sync).
    pub user_within_team_space_limit_type: crate::types::team_common::MemberSpaceLimitType,
    /// An accurate cached calculation of a team member's total space usage (bytes).
    pub user_within_team_space_used_cached: u64,
}

api_error!(GetAccountError, GetAccountBatchError);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn space_usage() {
        let usage: SpaceUsage = serde_json::from_value(json!({
            "used": 314159265,
            "allocation": {
                ".tag": "individual",
                "allocated": 10000000000u64
            }
        })).unwrap();
        assert_eq!(usage.used, 314159265);
        assert_eq!(
            usage.allocation,
            SpaceAllocation::Individual(IndividualSpaceAllocation { allocated: 10000000000 }));
    }

    #[test]
    fn batch_error_carries_account() {
        let e: GetAccountBatchError = serde_json::from_value(json!({
            ".tag": "no_account",
            "no_account": "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc"
        })).unwrap();
        assert_eq!(e.to_string(), r#"no_account: "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc""#);
    }

    #[test]
    fn full_account_with_team_root() {
        let account: FullAccount = serde_json::from_value(json!({
            "account_id": "dbid:x",
            "name": {
                "given_name": "Franz",
                "surname": "Ferdinand",
                "familiar_name": "Franz",
                "display_name": "Franz Ferdinand (Personal)",
                "abbreviated_name": "FF"
            },
            "email": "franz@dropbox.com",
            "email_verified": true,
            "disabled": false,
            "locale": "en",
            "referral_link": "https://db.tt/ZITNuhtI",
            "is_paired": true,
            "account_type": {".tag": "business"},
            "root_info": {
                ".tag": "user",
                "root_namespace_id": "3235641",
                "home_namespace_id": "3235641"
            },
            "country": "US"
        })).unwrap();
        assert_eq!(account.account_type, AccountType::Business);
        assert_eq!(account.name.display_name, "Franz Ferdinand (Personal)");
        assert!(matches!(account.root_info, RootInfo::User(_)));
        assert_eq!(account.team, None);
    }
}
