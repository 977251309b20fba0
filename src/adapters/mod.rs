// Adapters layer: locale-specific decorators over the address port and the
// dispatch that picks one from the payload's country.

pub mod de;

pub use de::DeAddressDecorator;

use crate::domain::ports::AddressView;
use serde_json::{Map, Value};

/// Wraps the address in its locale decorator, chosen by the address's own
/// country code. Only Germany has locale rules today; every other country
/// gets the address back undecorated.
pub fn localize_for_country<A>(address: A, response_data: Map<String, Value>) -> Box<dyn AddressView>
where
    A: AddressView + 'static,
{
    if address.country_code().eq_ignore_ascii_case("DE") {
        tracing::debug!("applying DE address rules");
        Box::new(DeAddressDecorator::new(address, response_data))
    } else {
        Box::new(address)
    }
}
