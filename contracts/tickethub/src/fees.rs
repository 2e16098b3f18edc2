use crate::*;
use primitive_types::U256;

/// Secondary-sale split. Truncation from both fee divisions accrues to
/// `seller_amount`, so the three parts always sum to the full value.
pub(crate) struct ResaleSplit {
    pub platform_fee: u128,
    pub royalty: u128,
    pub seller_amount: u128,
}

pub(crate) fn bps_of(amount: u128, bps: u32) -> u128 {
    (U256::from(amount) * U256::from(bps) / U256::from(BASIS_POINTS)).as_u128()
}

/// Primary-sale split: platform fee to treasury, remainder (including the
/// truncated fraction) to the event creator.
pub(crate) fn primary_split(total: u128) -> (u128, u128) {
    let platform_fee = bps_of(total, PLATFORM_FEE_BPS as u32);
    (platform_fee, total - platform_fee)
}

pub(crate) fn resale_split(value: u128, royalty_bps: u16) -> ResaleSplit {
    let platform_fee = bps_of(value, PLATFORM_FEE_BPS as u32);
    let royalty = bps_of(value, royalty_bps as u32);
    ResaleSplit {
        platform_fee,
        royalty,
        seller_amount: value - platform_fee - royalty,
    }
}

/// Frozen at event creation: `ticket_price * max_resale_bps / 10_000`.
pub(crate) fn resale_price_ceiling(ticket_price: u128, max_resale_bps: u32) -> u128 {
    bps_of(ticket_price, max_resale_bps)
}

/// Both resale paths share one pricing rule: half face value up to the
/// ceiling frozen at event creation.
pub(crate) fn check_resale_price(event: &Event, price: u128) -> Result<(), TicketingError> {
    let floor = event.ticket_price.0 / 2;
    let ceiling = event.max_resale_price.0;
    if price < floor || price > ceiling {
        return Err(TicketingError::PaymentOutOfBounds(format!(
            "Resale price {} outside allowed bounds {}..={}",
            price, floor, ceiling
        )));
    }
    Ok(())
}

pub(crate) fn transfer_funds(receiver_id: &AccountId, amount: u128) {
    if amount > 0 {
        let _ = Promise::new(receiver_id.clone()).transfer(NearToken::from_yoctonear(amount));
    }
}
