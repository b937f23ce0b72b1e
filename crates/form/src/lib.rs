//! # Endereco Form
//!
//! Live feedback and submit validation for a Brazilian postal address form
//! (CEP, Logradouro, Número, UF, Complemento).
//!
//! The crate never touches a rendering surface directly. Hosts provide:
//!
//! - one [`FieldHandle`] per input (read/write text, toggle markers, focus)
//! - a [`Notifier`] for submission outcomes
//! - a tokio runtime on which timed feedback is scheduled
//!
//! and forward element events to a [`FormValidator`].
//!
//! ## Quick start
//!
//! ```
//! use endereco_form::{FieldHandle, FieldId, Marker, MemoryForm};
//!
//! # fn main() -> Result<(), endereco_form::FormError> {
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_time()
//!     .build()
//!     .expect("runtime");
//! let _enter = runtime.enter();
//!
//! let form = MemoryForm::new()?;
//! form.type_into(FieldId::PostalCode, "01310100");
//!
//! let cep = form.field(FieldId::PostalCode);
//! assert_eq!(cep.value(), "01310-100");
//! assert!(cep.has_marker(Marker::Success));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod memory;
pub mod notify;
pub mod record;
pub mod schedule;

pub use config::{COMPLEMENT_PLACEHOLDER, FormConfig};
pub use endereco_validator::{FieldId, MaskOptions, PostalCodeOverflow};
pub use error::{FormError, SubmitError};
pub use event::{EventSender, FormEvent};
pub use field::{FeedbackState, FieldHandle, FieldStatus, Marker};
pub use form::{FormValidator, FormValidatorBuilder};
pub use memory::{CapturingNotifier, MemoryField, MemoryForm, Notification};
pub use notify::{Notifier, SUCCESS_MESSAGE};
pub use record::AddressRecord;
pub use schedule::{Scheduler, TaskScope};
