use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn create_event(&mut self, config: EventConfig) -> Result<u64, TicketingError> {
        let creator_id = env::predecessor_account_id();
        self.internal_create_event(&creator_id, config)
    }

    #[payable]
    #[handle_result]
    pub fn complete_event(&mut self, event_id: u64) -> Result<(), TicketingError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.internal_complete_event(&actor_id, event_id)
    }

    #[handle_result]
    pub fn deactivate_event(&mut self, event_id: u64) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.internal_deactivate_event(&actor_id, event_id)
    }

    #[handle_result]
    pub fn reactivate_event(&mut self, event_id: u64) -> Result<(), TicketingError> {
        let actor_id = env::predecessor_account_id();
        self.internal_reactivate_event(&actor_id, event_id)
    }
}

impl Contract {
    pub(crate) fn internal_create_event(
        &mut self,
        creator_id: &AccountId,
        config: EventConfig,
    ) -> Result<u64, TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();
        crate::validation::validate_event_config(&config, now)?;

        let max_resale_price =
            crate::fees::resale_price_ceiling(config.ticket_price.0, config.max_resale_bps);

        let event_id = self.next_event_id;
        self.next_event_id = self
            .next_event_id
            .checked_add(1)
            .ok_or_else(|| TicketingError::counter_overflow("event ID"))?;

        let event = Event {
            id: event_id,
            creator_id: creator_id.clone(),
            name: config.name.clone(),
            description: config.description,
            location: config.location,
            event_date: config.event_date,
            ticket_price: config.ticket_price,
            max_supply: config.max_supply,
            current_supply: 0,
            max_resale_price: U128(max_resale_price),
            royalty_bps: config.royalty_bps,
            is_active: true,
            completed: false,
            metadata_ref: config.metadata_ref,
        };
        self.events_by_id.insert(event_id, event);

        events::emit_event_created(
            creator_id,
            event_id,
            &config.name,
            config.event_date,
            config.ticket_price,
            config.max_supply,
            U128(max_resale_price),
            config.royalty_bps,
        );
        Ok(event_id)
    }

    pub(crate) fn internal_complete_event(
        &mut self,
        actor_id: &AccountId,
        event_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_not_paused()?;
        let now = env::block_timestamp();

        let event = self
            .events_by_id
            .get(&event_id)
            .ok_or_else(|| TicketingError::event_not_found(event_id))?;
        self.check_event_creator(actor_id, event, "complete this event")?;

        if event.completed {
            return Err(TicketingError::event_completed());
        }
        // Completion waits out the scan window so late scans cannot race it.
        // A deadline past u64::MAX can never be reached, so the event stays
        // ongoing rather than panicking on the addition.
        let deadline = event.event_date.checked_add(COMPLETION_DELAY_NS);
        if deadline.map_or(true, |deadline| now <= deadline) {
            return Err(TicketingError::StateConflict(
                "Event is still ongoing: completion requires 24h past the event date".into(),
            ));
        }

        let mut event = event.clone();
        event.completed = true;
        self.events_by_id.insert(event_id, event);

        events::emit_event_completed(actor_id, event_id);
        Ok(())
    }

    pub(crate) fn internal_deactivate_event(
        &mut self,
        actor_id: &AccountId,
        event_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_admin(actor_id)?;
        let event = self
            .events_by_id
            .get(&event_id)
            .ok_or_else(|| TicketingError::event_not_found(event_id))?;
        if !event.is_active {
            return Err(TicketingError::StateConflict(
                "Event is already inactive".into(),
            ));
        }

        let mut event = event.clone();
        event.is_active = false;
        self.events_by_id.insert(event_id, event);

        events::emit_event_deactivated(actor_id, event_id);
        Ok(())
    }

    pub(crate) fn internal_reactivate_event(
        &mut self,
        actor_id: &AccountId,
        event_id: u64,
    ) -> Result<(), TicketingError> {
        self.check_admin(actor_id)?;
        let event = self
            .events_by_id
            .get(&event_id)
            .ok_or_else(|| TicketingError::event_not_found(event_id))?;
        if event.is_active {
            return Err(TicketingError::StateConflict(
                "Event is already active".into(),
            ));
        }

        let mut event = event.clone();
        event.is_active = true;
        self.events_by_id.insert(event_id, event);

        events::emit_event_reactivated(actor_id, event_id);
        Ok(())
    }
}
