//! Board roles and the authorization gate.
//!
//! Every board-scoped operation is checked through [`authorize`], which consults one
//! static role → capability table. Ownership is folded into an [`EffectiveRole`] so
//! no call site repeats an owner-or-admin check of its own.

use sea_orm::DbErr;
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::model::member::RoleDto;

/// Role a membership row grants on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Member,
    Observer,
}

/// Things a role may be allowed to do on a board's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Create,
    Read,
    Update,
    Delete,
    InviteMembers,
    ManageSettings,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Create,
        Capability::Read,
        Capability::Update,
        Capability::Delete,
        Capability::InviteMembers,
        Capability::ManageSettings,
    ];
}

impl Role {
    /// The permission table.
    pub fn allows(self, capability: Capability) -> bool {
        use Capability::*;

        match (self, capability) {
            (Role::Admin, _) => true,
            (Role::Member, Create | Read | Update) => true,
            (Role::Member, Delete | InviteMembers | ManageSettings) => false,
            (Role::Observer, Read) => true,
            (Role::Observer, Create | Update | Delete | InviteMembers | ManageSettings) => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Observer => "observer",
        }
    }

    pub fn from_dto(dto: RoleDto) -> Self {
        match dto {
            RoleDto::Admin => Role::Admin,
            RoleDto::Member => Role::Member,
            RoleDto::Observer => Role::Observer,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Role::Admin => RoleDto::Admin,
            Role::Member => RoleDto::Member,
            Role::Observer => RoleDto::Observer,
        }
    }
}

/// Parses a stored role string.
///
/// Roles are a closed set, so anything else in the table is a data fault.
impl FromStr for Role {
    type Err = DbErr;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            "observer" => Ok(Role::Observer),
            other => Err(DbErr::Custom(format!("Unknown board role '{}'", other))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Create => "create",
            Capability::Read => "read",
            Capability::Update => "update",
            Capability::Delete => "delete",
            Capability::InviteMembers => "invite members",
            Capability::ManageSettings => "manage settings",
        };
        f.write_str(name)
    }
}

/// Action checked by the gate.
///
/// Board deletion and leaving carry their own rules on top of the capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Can(Capability),
    DeleteBoard,
    LeaveBoard,
}

impl From<Capability> for BoardAction {
    fn from(capability: Capability) -> Self {
        BoardAction::Can(capability)
    }
}

/// Role after ownership has been taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveRole {
    /// Board owner; admin-equivalent whether or not a membership row exists.
    Owner,
    Admin,
    Member,
    Observer,
}

impl EffectiveRole {
    /// Folds ownership into the membership role. `None` means no access at all.
    pub fn resolve(role: Option<Role>, is_owner: bool) -> Option<Self> {
        if is_owner {
            return Some(EffectiveRole::Owner);
        }

        role.map(|role| match role {
            Role::Admin => EffectiveRole::Admin,
            Role::Member => EffectiveRole::Member,
            Role::Observer => EffectiveRole::Observer,
        })
    }

    /// The table role this effective role is evaluated as.
    pub fn as_role(self) -> Role {
        match self {
            EffectiveRole::Owner | EffectiveRole::Admin => Role::Admin,
            EffectiveRole::Member => Role::Member,
            EffectiveRole::Observer => Role::Observer,
        }
    }

    pub fn allows(self, capability: Capability) -> bool {
        self.as_role().allows(capability)
    }
}

/// Reason the gate refused an action.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("You are not a member of this board")]
    NotAMember,

    #[error("The {0} role does not allow {1} on this board")]
    MissingCapability(Role, Capability),

    #[error("Only the board owner or an admin can delete this board")]
    OwnerOrAdminRequired,

    #[error("The board owner cannot leave the board; transfer or delete it instead")]
    OwnerCannotLeave,
}

/// Decides whether a user holding `role` (and possibly owning the board) may perform `action`.
///
/// # Rules
/// 1. No membership and not the owner: denied.
/// 2. The owner is evaluated as an admin for every capability.
/// 3. Deleting the board requires ownership or the admin role.
/// 4. Leaving is open to members and observers but never to the owner.
///
/// # Returns
/// - `Ok(EffectiveRole)` - Action allowed
/// - `Err(Denial)` - Action refused, with the reason
pub fn authorize(
    role: Option<Role>,
    is_owner: bool,
    action: BoardAction,
) -> Result<EffectiveRole, Denial> {
    let effective = EffectiveRole::resolve(role, is_owner).ok_or(Denial::NotAMember)?;

    match action {
        BoardAction::Can(capability) => {
            if effective.allows(capability) {
                Ok(effective)
            } else {
                Err(Denial::MissingCapability(effective.as_role(), capability))
            }
        }
        BoardAction::DeleteBoard => match effective {
            EffectiveRole::Owner | EffectiveRole::Admin => Ok(effective),
            EffectiveRole::Member | EffectiveRole::Observer => Err(Denial::OwnerOrAdminRequired),
        },
        BoardAction::LeaveBoard => match effective {
            EffectiveRole::Owner => Err(Denial::OwnerCannotLeave),
            _ => Ok(effective),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 3] = [Role::Admin, Role::Member, Role::Observer];

    #[test]
    fn matches_permission_table() {
        let expected = [
            (Role::Admin, [true, true, true, true, true, true]),
            (Role::Member, [true, true, true, false, false, false]),
            (Role::Observer, [false, true, false, false, false, false]),
        ];

        for (role, row) in expected {
            for (capability, allowed) in Capability::ALL.into_iter().zip(row) {
                assert_eq!(
                    authorize(Some(role), false, capability.into()).is_ok(),
                    allowed,
                    "{} / {}",
                    role,
                    capability
                );
            }
        }
    }

    #[test]
    fn observer_only_reads() {
        for capability in Capability::ALL {
            let result = authorize(Some(Role::Observer), false, capability.into());
            if capability == Capability::Read {
                assert_eq!(result, Ok(EffectiveRole::Observer));
            } else {
                assert_eq!(
                    result,
                    Err(Denial::MissingCapability(Role::Observer, capability))
                );
            }
        }
    }

    #[test]
    fn non_member_is_denied_everything() {
        for capability in Capability::ALL {
            assert_eq!(
                authorize(None, false, capability.into()),
                Err(Denial::NotAMember)
            );
        }
        assert_eq!(
            authorize(None, false, BoardAction::DeleteBoard),
            Err(Denial::NotAMember)
        );
        assert_eq!(
            authorize(None, false, BoardAction::LeaveBoard),
            Err(Denial::NotAMember)
        );
    }

    #[test]
    fn owner_without_membership_is_admin_equivalent() {
        for capability in Capability::ALL {
            assert_eq!(
                authorize(None, true, capability.into()),
                Ok(EffectiveRole::Owner)
            );
        }
        assert!(authorize(None, true, BoardAction::DeleteBoard).is_ok());
    }

    #[test]
    fn ownership_overrides_a_weaker_membership_row() {
        assert_eq!(
            authorize(Some(Role::Observer), true, Capability::ManageSettings.into()),
            Ok(EffectiveRole::Owner)
        );
    }

    #[test]
    fn board_deletion_needs_owner_or_admin() {
        assert!(authorize(Some(Role::Admin), false, BoardAction::DeleteBoard).is_ok());
        assert_eq!(
            authorize(Some(Role::Member), false, BoardAction::DeleteBoard),
            Err(Denial::OwnerOrAdminRequired)
        );
        assert_eq!(
            authorize(Some(Role::Observer), false, BoardAction::DeleteBoard),
            Err(Denial::OwnerOrAdminRequired)
        );
    }

    #[test]
    fn leaving_is_denied_only_to_owner() {
        for role in ROLES {
            assert!(authorize(Some(role), false, BoardAction::LeaveBoard).is_ok());
        }
        assert_eq!(
            authorize(Some(Role::Admin), true, BoardAction::LeaveBoard),
            Err(Denial::OwnerCannotLeave)
        );
    }

    #[test]
    fn parses_stored_roles() {
        for role in ROLES {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("owner".parse::<Role>().is_err());
    }
}
