//! Project showcase controllers: card parsing, filter and pagination, the
//! modal gallery and its keyboard contract.
//!
//! Nothing here touches the DOM. The browser binding implements
//! [`CardElement`] and [`ModalView`] over real elements.

pub mod activation;
pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod focus;
pub mod gallery;
pub mod media;
pub mod modal;
pub mod nav;

pub use activation::{ActivationGuard, is_activation_key};
pub use card::{Card, CardElement, CardPart, EventMeta, Link};
pub use config::ShowcaseConfig;
pub use error::{Result, ShowcaseError};
pub use filter::{Categorized, Filter, FilterPager, initial_tab};
pub use focus::{FocusScope, trap_target};
pub use gallery::Gallery;
pub use media::{MediaItem, MediaKind};
pub use modal::{MetaField, ModalController, ModalKey, ModalState, ModalView, Opened};
pub use nav::NavState;
