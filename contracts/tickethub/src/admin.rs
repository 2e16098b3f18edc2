use crate::*;

#[near(serializers = [json])]
pub struct PlatformConfig {
    pub owner_id: AccountId,
    pub treasury_id: AccountId,
    pub emergency_admin_id: AccountId,
    pub paused: bool,
    pub platform_fee_bps: u16,
}

#[near]
impl Contract {
    #[handle_result]
    pub fn set_owner(&mut self, new_owner_id: AccountId) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.check_contract_owner(&actor_id)?;

        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner_id.clone();

        events::emit_owner_transferred(&old_owner, &new_owner_id);
        Ok(())
    }

    #[handle_result]
    pub fn set_treasury(&mut self, new_treasury_id: AccountId) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.check_contract_owner(&actor_id)?;

        let old_treasury = self.treasury_id.clone();
        self.treasury_id = new_treasury_id.clone();

        events::emit_treasury_changed(&actor_id, &old_treasury, &new_treasury_id);
        Ok(())
    }

    #[handle_result]
    pub fn set_emergency_admin(
        &mut self,
        new_admin_id: AccountId,
    ) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.check_contract_owner(&actor_id)?;

        let old_admin = self.emergency_admin_id.clone();
        self.emergency_admin_id = new_admin_id.clone();

        events::emit_emergency_admin_changed(&actor_id, &old_admin, &new_admin_id);
        Ok(())
    }

    /// Halts every user-facing mutating operation. Admin escape hatches
    /// (`emergency_cancel_listing`, event de/reactivation) stay available.
    #[handle_result]
    pub fn pause(&mut self) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.check_admin(&actor_id)?;
        if self.paused {
            return Err(TicketingError::StateConflict("Already paused".into()));
        }
        self.paused = true;

        events::emit_paused(&actor_id);
        Ok(())
    }

    #[handle_result]
    pub fn unpause(&mut self) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.check_admin(&actor_id)?;
        if !self.paused {
            return Err(TicketingError::StateConflict("Not paused".into()));
        }
        self.paused = false;

        events::emit_unpaused(&actor_id);
        Ok(())
    }

    pub fn get_platform_config(&self) -> PlatformConfig {
        PlatformConfig {
            owner_id: self.owner_id.clone(),
            treasury_id: self.treasury_id.clone(),
            emergency_admin_id: self.emergency_admin_id.clone(),
            paused: self.paused,
            platform_fee_bps: PLATFORM_FEE_BPS,
        }
    }
}
