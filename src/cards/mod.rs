//! Card system: the card contract, the standard cards, and the registry.
//!
//! ## Key Types
//!
//! - `Card`: the trait every spell implements
//! - `CardDefinition`: static identity (name, cost, emoji, effect)
//! - `CardFlags`: runtime flags (in hand, cooldown)
//! - `CardRegistry`: lookup and instantiation
//!
//! ## Standard Cards
//!
//! - `SolarBeam`: damage, bonus against undead
//! - `BarkSkin`: damage reduction, does not stack
//! - `Regrowth`: heal plus regeneration

pub mod attributes;
pub mod card;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod solar_beam;
pub mod bark_skin;
pub mod regrowth;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{meets_play_requirements, Card};
pub use definition::{CardDefinition, CardId};
pub use instance::CardFlags;
pub use registry::{CardRegistry, CardTemplate};
pub use solar_beam::{SolarBeam, SOLAR_BEAM};
pub use bark_skin::{BarkSkin, BARKSKIN_STATUS, BARK_SKIN};
pub use regrowth::{Regrowth, REGROWTH, REGROWTH_STATUS};
