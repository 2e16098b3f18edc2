use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), TicketingError> {
    if env::attached_deposit().as_yoctonear() != 1 {
        return Err(TicketingError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_not_paused(&self) -> Result<(), TicketingError> {
        if self.paused {
            return Err(TicketingError::StateConflict(
                "Platform is paused".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), TicketingError> {
        if actor_id != &self.owner_id {
            return Err(TicketingError::only_owner("the contract owner"));
        }
        Ok(())
    }

    // Escape-hatch authority: the contract owner or the designated emergency admin.
    pub(crate) fn check_admin(&self, actor_id: &AccountId) -> Result<(), TicketingError> {
        if actor_id != &self.owner_id && actor_id != &self.emergency_admin_id {
            return Err(TicketingError::only_owner(
                "the contract owner or emergency admin",
            ));
        }
        Ok(())
    }

    pub(crate) fn check_event_creator(
        &self,
        actor_id: &AccountId,
        event: &Event,
        what: &str,
    ) -> Result<(), TicketingError> {
        if actor_id != &event.creator_id {
            return Err(TicketingError::only_creator(what));
        }
        Ok(())
    }
}
