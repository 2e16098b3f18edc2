use crate::*;

pub(crate) fn validate_event_config(config: &EventConfig, now: u64) -> Result<(), TicketingError> {
    if config.name.trim().is_empty() {
        return Err(TicketingError::InvalidInput("Event name is required".into()));
    }
    if config.name.len() > MAX_NAME_LEN {
        return Err(TicketingError::InvalidInput(format!(
            "Event name exceeds max length of {}",
            MAX_NAME_LEN
        )));
    }
    if config.description.len() > MAX_DESCRIPTION_LEN {
        return Err(TicketingError::InvalidInput(format!(
            "Description exceeds max length of {}",
            MAX_DESCRIPTION_LEN
        )));
    }
    if config.location.trim().is_empty() {
        return Err(TicketingError::InvalidInput(
            "Event location is required".into(),
        ));
    }
    if config.location.len() > MAX_LOCATION_LEN {
        return Err(TicketingError::InvalidInput(format!(
            "Location exceeds max length of {}",
            MAX_LOCATION_LEN
        )));
    }
    if config.event_date <= now {
        return Err(TicketingError::InvalidInput(
            "Event date must be in the future".into(),
        ));
    }
    if config.ticket_price.0 == 0 {
        return Err(TicketingError::InvalidInput(
            "Ticket price must be greater than 0".into(),
        ));
    }
    if config.max_supply == 0 || config.max_supply > MAX_EVENT_SUPPLY {
        return Err(TicketingError::InvalidInput(format!(
            "Max supply must be 1..={}",
            MAX_EVENT_SUPPLY
        )));
    }
    if !(MIN_RESALE_CEILING_BPS..=MAX_RESALE_CEILING_BPS).contains(&config.max_resale_bps) {
        return Err(TicketingError::InvalidInput(format!(
            "Resale ceiling must be {}..={} bps of face value",
            MIN_RESALE_CEILING_BPS, MAX_RESALE_CEILING_BPS
        )));
    }
    if config.royalty_bps > MAX_ROYALTY_BPS {
        return Err(TicketingError::InvalidInput(format!(
            "Royalty {} bps exceeds max {} bps",
            config.royalty_bps, MAX_ROYALTY_BPS
        )));
    }
    validate_metadata_ref(&config.metadata_ref)?;
    Ok(())
}

// Opaque pointer for the off-chain content store: only non-emptiness and a
// length cap are enforced here.
pub(crate) fn validate_metadata_ref(metadata_ref: &str) -> Result<(), TicketingError> {
    if metadata_ref.trim().is_empty() {
        return Err(TicketingError::InvalidInput(
            "Metadata reference is required".into(),
        ));
    }
    if metadata_ref.len() > MAX_METADATA_REF_LEN {
        return Err(TicketingError::InvalidInput(format!(
            "Metadata reference exceeds max length of {}",
            MAX_METADATA_REF_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_qr_hash(qr_hash: &str) -> Result<(), TicketingError> {
    if qr_hash.trim().is_empty() {
        return Err(TicketingError::InvalidInput(
            "QR code hash is required".into(),
        ));
    }
    if qr_hash.len() > MAX_QR_HASH_LEN {
        return Err(TicketingError::InvalidInput(format!(
            "QR code hash exceeds max length of {}",
            MAX_QR_HASH_LEN
        )));
    }
    Ok(())
}
