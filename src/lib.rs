//! # Meridian Event Contracts
//!
//! Shared stream names, consumer groups, routing tables, and payload schemas
//! for the Meridian medical microservices platform.
//!
//! Every service publishing or consuming platform events depends on this
//! crate instead of hard-coding names, so a rename or a routing change lands
//! in one place and propagates at compile time.
//!
//! ## Architecture
//!
//! ```text
//! Publisher -> Event Stream -> Consumer Group -> Processors
//! ```
//!
//! ## Modules
//!
//! - [`streams`]: Event stream catalog, stream ownership, name validation
//! - [`services`]: Service name catalog
//! - [`consumers`]: Consumer group catalog
//! - [`routing`]: Group subscriptions and per-service group recommendations
//! - [`event`]: The envelope every stream payload rides in
//! - [`events`]: Per-service event-type catalogs and payload schemas
//!
//! ## Example
//!
//! ```rust
//! use meridian_contracts::{ConsumerGroup, EventStream, is_valid_stream};
//!
//! // Publisher
//! let stream = EventStream::UserServiceEvents;
//! assert!(is_valid_stream(stream.as_str()));
//!
//! // Consumer
//! for stream in ConsumerGroup::EmailNotificationProcessors.streams() {
//!     // subscribe to stream.as_str()
//!     let _ = stream;
//! }
//! ```

pub mod consumers;
pub mod event;
pub mod events;
pub mod routing;
pub mod services;
pub mod streams;

// Re-export the types most services need at crate root
pub use consumers::{ConsumerGroup, UnknownConsumerGroup};
pub use event::{EventEnvelope, EventMetadata, EventPriority};
pub use routing::{consumer_group_streams, service_consumer_groups};
pub use services::{Service, UnknownService};
pub use streams::{
    is_valid_stream, streams_by_service, DomainStream, EventStream, StreamOwner, UnknownStream,
    UnknownStreamOwner,
};

/// Schema version stamped into event metadata.
pub const CONTRACT_VERSION: &str = "1.0";
