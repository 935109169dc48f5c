use super::prelude::*;
use crate::availability::{AvailabilityState, BookingGate};

/// Asks the backend whether the selected dates are still free.
pub fn check_availability<G>(
    gateway: &G,
    gate: &mut BookingGate,
    place_id: &Id,
) -> Result<AvailabilityState>
where
    G: BookingGateway,
{
    let stay = gate.begin_check()?;
    match gateway.check_availability(place_id, &stay) {
        Ok(available) => {
            gate.finish_check(&stay, available);
            Ok(gate.state())
        }
        Err(err) => {
            log::warn!("Availability check for place {place_id} failed: {err}");
            gate.check_failed();
            Err(err.into())
        }
    }
}
