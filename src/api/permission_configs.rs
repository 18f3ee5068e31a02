/*
This file contains the role gate for every protected operation.
Authentication answers who you are, this table answers what that
identity is allowed to touch.
*/
use crate::api::types::Role;
use crate::common::errors;
use crate::common::errors::ApiError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GatedAction {
    ManageOpportunities,
    SignUpForOpportunity,
    CancelOwnSignup,
    ManageUsers,
    ViewOrgDashboard,
    RegisterWithElevatedRole,
}

pub fn action_is_allowed(action: &GatedAction, role: &Role) -> bool {
    match action {
        GatedAction::ManageOpportunities => {
            return role == &Role::Organization || role == &Role::Admin;
        }
        //any authenticated identity can pledge hours or take the pledge back
        GatedAction::SignUpForOpportunity => return true,
        GatedAction::CancelOwnSignup => return true,
        GatedAction::ManageUsers => return role == &Role::Admin,
        GatedAction::ViewOrgDashboard => return role == &Role::Organization,
        GatedAction::RegisterWithElevatedRole => return role == &Role::Admin,
    }
}

pub fn ensure_allowed(action: GatedAction, role: &Role) -> Result<(), ApiError> {
    if action_is_allowed(&action, role) {
        return Ok(());
    }
    return Err(errors::forbidden());
}
