//! Per-command, per-actor cooldown tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use herald_types::ActorId;

use crate::registry::CommandId;

/// Last-invocation timestamps, keyed by command then actor.
///
/// Shared across concurrent dispatch tasks behind an `Arc`; the interior
/// lock makes each read and each write atomic on its own. The
/// check-then-record pair spans the permission and parse gates and is
/// deliberately not atomic -- a failed gate must leave the timestamp
/// untouched.
///
/// Entries are created lazily on first record and evicted lazily when a
/// read finds them expired. Nothing persists across restarts.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    stamps: Mutex<HashMap<CommandId, HashMap<ActorId, Instant>>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left before `actor` may run `command` again; zero when the
    /// actor is clear to go. `cooldown_secs` is the command's configured
    /// interval.
    pub fn remaining(&self, command: CommandId, cooldown_secs: u64, actor: &ActorId) -> Duration {
        self.remaining_at(command, cooldown_secs, actor, Instant::now())
    }

    /// Stamp the invocation time for `(command, actor)`.
    ///
    /// Called only after the permission and parse gates have both passed;
    /// failed or rejected attempts never consume cooldown.
    pub fn record(&self, command: CommandId, actor: &ActorId) {
        self.record_at(command, actor, Instant::now());
    }

    fn remaining_at(
        &self,
        command: CommandId,
        cooldown_secs: u64,
        actor: &ActorId,
        now: Instant,
    ) -> Duration {
        let mut stamps = self.stamps.lock();
        let Some(per_actor) = stamps.get_mut(&command) else {
            return Duration::ZERO;
        };
        let Some(last) = per_actor.get(actor) else {
            return Duration::ZERO;
        };

        let window = Duration::from_secs(cooldown_secs);
        let elapsed = now.saturating_duration_since(*last);
        if elapsed > window {
            // Stale entry: evict on read.
            per_actor.remove(actor);
            return Duration::ZERO;
        }
        window - elapsed
    }

    fn record_at(&self, command: CommandId, actor: &ActorId, now: Instant) {
        self.stamps
            .lock()
            .entry(command)
            .or_default()
            .insert(actor.clone(), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ChatCommand;
    use crate::context::Invocation;
    use crate::spec::CommandSpec;
    use async_trait::async_trait;
    use herald_channel::{ChannelError, ReplySink};

    // Marker handler types: the tracker only ever sees their ids.
    struct Sample;
    struct Other;

    #[async_trait]
    impl ChatCommand for Sample {
        fn spec(&self) -> &CommandSpec {
            unreachable!("marker type used only as a cooldown key")
        }

        async fn execute(&self, _ctx: Invocation, _sink: &dyn ReplySink) -> Result<(), ChannelError> {
            unreachable!("marker type used only as a cooldown key")
        }
    }

    #[async_trait]
    impl ChatCommand for Other {
        fn spec(&self) -> &CommandSpec {
            unreachable!("marker type used only as a cooldown key")
        }

        async fn execute(&self, _ctx: Invocation, _sink: &dyn ReplySink) -> Result<(), ChannelError> {
            unreachable!("marker type used only as a cooldown key")
        }
    }

    fn ids() -> (CommandId, ActorId) {
        (CommandId::of::<Sample>(), ActorId::new("alice"))
    }

    #[test]
    fn no_prior_invocation_means_no_cooldown() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        assert_eq!(tracker.remaining(command, 5, &alice), Duration::ZERO);
    }

    #[test]
    fn blocked_one_millisecond_before_expiry() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        let t0 = Instant::now();

        tracker.record_at(command, &alice, t0);
        let now = t0 + Duration::from_millis(5_000 - 1);
        let remaining = tracker.remaining_at(command, 5, &alice, now);
        assert_eq!(remaining, Duration::from_millis(1));
    }

    #[test]
    fn allowed_at_exact_expiry() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        let t0 = Instant::now();

        tracker.record_at(command, &alice, t0);
        let remaining = tracker.remaining_at(command, 5, &alice, t0 + Duration::from_secs(5));
        assert_eq!(remaining, Duration::ZERO);
    }

    #[test]
    fn stale_entry_is_evicted_on_read() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        let t0 = Instant::now();

        tracker.record_at(command, &alice, t0);
        let past_expiry = t0 + Duration::from_secs(6);
        assert_eq!(
            tracker.remaining_at(command, 5, &alice, past_expiry),
            Duration::ZERO
        );
        assert!(tracker.stamps.lock()[&command].get(&alice).is_none());
    }

    #[test]
    fn re_recording_resets_the_window() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        let t0 = Instant::now();

        tracker.record_at(command, &alice, t0);
        let t1 = t0 + Duration::from_secs(5);
        tracker.record_at(command, &alice, t1);
        assert_eq!(
            tracker.remaining_at(command, 5, &alice, t1 + Duration::from_secs(2)),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn actors_are_tracked_independently() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        let bob = ActorId::new("bob");
        let t0 = Instant::now();

        tracker.record_at(command, &alice, t0);
        assert!(tracker.remaining_at(command, 5, &alice, t0) > Duration::ZERO);
        assert_eq!(tracker.remaining_at(command, 5, &bob, t0), Duration::ZERO);
    }

    #[test]
    fn commands_are_tracked_independently() {
        let tracker = CooldownTracker::new();
        let (sample, alice) = ids();
        let other = CommandId::of::<Other>();
        let t0 = Instant::now();

        tracker.record_at(sample, &alice, t0);
        assert_eq!(tracker.remaining_at(other, 5, &alice, t0), Duration::ZERO);
    }

    #[test]
    fn zero_cooldown_never_blocks() {
        let tracker = CooldownTracker::new();
        let (command, alice) = ids();
        let t0 = Instant::now();

        tracker.record_at(command, &alice, t0);
        assert_eq!(tracker.remaining_at(command, 0, &alice, t0), Duration::ZERO);
    }
}
