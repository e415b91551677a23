// src/analysis/registry.rs
//! Built-in detector table, keyed by node kind.

use crate::types::Idiom;

use super::detectors::{
    ChannelMake, ChannelReceive, ChannelSend, Detector, MethodCall, NewCond, SyncDecl, SyncField,
};
use super::kind::NodeKind;

static CHANNEL_MAKE: ChannelMake = ChannelMake;
static NEW_COND: NewCond = NewCond;
static CHANNEL_SEND: ChannelSend = ChannelSend;
static CHANNEL_RECEIVE: ChannelReceive = ChannelReceive;

// === DECLARATIONS ===
static WAIT_GROUP_DECL: SyncDecl = SyncDecl::every_spec(
    Idiom::WaitGroupDecl,
    "WaitGroup",
    "var x sync.WaitGroup: declared name",
);
static MUTEX_DECL: SyncDecl =
    SyncDecl::every_spec(Idiom::MutexDecl, "Mutex", "var x sync.Mutex: declared name");
static RW_MUTEX_DECL: SyncDecl =
    SyncDecl::every_spec(Idiom::RwMutexDecl, "RWMutex", "var x sync.RWMutex: declared name");
// Grouped declarations only have their first spec inspected for Locker.
static LOCKER_DECL: SyncDecl = SyncDecl::first_spec(
    Idiom::LockerDecl,
    "Locker",
    "var x sync.Locker: declared name (first spec of a group only)",
);
static ONCE_DECL: SyncDecl =
    SyncDecl::every_spec(Idiom::OnceDecl, "Once", "var x sync.Once: declared name");

// === FIELDS AND PARAMETERS ===
static WAIT_GROUP_FIELD: SyncField = SyncField::new(
    Idiom::WaitGroupField,
    "WaitGroup",
    "field or parameter of type sync.WaitGroup",
);
static MUTEX_FIELD: SyncField =
    SyncField::new(Idiom::MutexField, "Mutex", "field or parameter of type sync.Mutex");
static RW_MUTEX_FIELD: SyncField =
    SyncField::new(Idiom::RwMutexField, "RWMutex", "field or parameter of type sync.RWMutex");
static LOCKER_FIELD: SyncField =
    SyncField::new(Idiom::LockerField, "Locker", "field or parameter of type sync.Locker");
static ONCE_FIELD: SyncField =
    SyncField::new(Idiom::OnceField, "Once", "field or parameter of type sync.Once");

// === METHOD SELECTORS ===
static WAIT_GROUP_DONE: MethodCall =
    MethodCall::new(Idiom::WaitGroupDone, "Done", "x.Done: receiver expression");
static WAIT_GROUP_ADD: MethodCall =
    MethodCall::new(Idiom::WaitGroupAdd, "Add", "x.Add: receiver expression");
static WAIT_GROUP_WAIT: MethodCall =
    MethodCall::new(Idiom::WaitGroupWait, "Wait", "x.Wait: receiver expression");
static LOCK: MethodCall = MethodCall::new(Idiom::Lock, "Lock", "x.Lock: receiver expression");
static UNLOCK: MethodCall =
    MethodCall::new(Idiom::Unlock, "Unlock", "x.Unlock: receiver expression");
static COND_SIGNAL: MethodCall =
    MethodCall::new(Idiom::CondSignal, "Signal", "x.Signal: receiver expression");
static COND_BROADCAST: MethodCall =
    MethodCall::new(Idiom::CondBroadcast, "Broadcast", "x.Broadcast: receiver expression");
static ONCE_DO: MethodCall = MethodCall::new(Idiom::OnceDo, "Do", "x.Do: receiver expression");

static CALL_DETECTORS: [&dyn Detector; 2] = [&CHANNEL_MAKE, &NEW_COND];
static SEND_DETECTORS: [&dyn Detector; 1] = [&CHANNEL_SEND];
static UNARY_DETECTORS: [&dyn Detector; 1] = [&CHANNEL_RECEIVE];
static DECL_DETECTORS: [&dyn Detector; 5] = [
    &WAIT_GROUP_DECL,
    &MUTEX_DECL,
    &RW_MUTEX_DECL,
    &LOCKER_DECL,
    &ONCE_DECL,
];
static FIELD_DETECTORS: [&dyn Detector; 5] = [
    &WAIT_GROUP_FIELD,
    &MUTEX_FIELD,
    &RW_MUTEX_FIELD,
    &LOCKER_FIELD,
    &ONCE_FIELD,
];
static MEMBER_DETECTORS: [&dyn Detector; 8] = [
    &WAIT_GROUP_DONE,
    &WAIT_GROUP_ADD,
    &WAIT_GROUP_WAIT,
    &LOCK,
    &UNLOCK,
    &COND_SIGNAL,
    &COND_BROADCAST,
    &ONCE_DO,
];

/// Detectors accepting `kind`, in registration order.
#[must_use]
pub fn detectors_for(kind: NodeKind) -> &'static [&'static dyn Detector] {
    match kind {
        NodeKind::CallExpression => &CALL_DETECTORS,
        NodeKind::SendStatement => &SEND_DETECTORS,
        NodeKind::UnaryOperation => &UNARY_DETECTORS,
        NodeKind::GenericDeclaration => &DECL_DETECTORS,
        NodeKind::StructField => &FIELD_DETECTORS,
        NodeKind::MemberAccess => &MEMBER_DETECTORS,
        NodeKind::Other => &[],
    }
}

/// Every registered detector, grouped by kind in dispatch order.
pub fn all() -> impl Iterator<Item = &'static dyn Detector> {
    NodeKind::ALL
        .into_iter()
        .flat_map(|kind| detectors_for(kind).iter().copied())
}
