/// Monotonic request tags. A response is applied only if it is newer than
/// the last applied one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    issued: u64,
    applied: u64,
}

impl Sequence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a newer response has already been applied, or the request
    /// was issued before an invalidation.
    pub fn is_stale(&self, seq: u64) -> bool {
        seq <= self.applied
    }

    pub fn accept(&mut self, seq: u64) -> bool {
        if self.is_stale(seq) {
            return false;
        }

        self.applied = seq;
        true
    }

    /// Discards every response issued so far.
    pub fn invalidate(&mut self) {
        let seq = self.issue();
        self.applied = seq;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_responses_older_than_the_applied_one() {
        let mut sequence = Sequence::default();
        let first = sequence.issue();
        let second = sequence.issue();

        assert!(sequence.accept(second));
        assert!(!sequence.accept(first));
        assert!(!sequence.accept(second));
    }

    #[test]
    fn applies_in_order_responses() {
        let mut sequence = Sequence::default();
        let first = sequence.issue();
        let second = sequence.issue();

        assert!(sequence.accept(first));
        assert!(sequence.accept(second));
    }

    #[test]
    fn invalidate_discards_in_flight_requests() {
        let mut sequence = Sequence::default();
        let in_flight = sequence.issue();

        sequence.invalidate();

        assert!(sequence.is_stale(in_flight));
        assert!(!sequence.accept(in_flight));
        let next = sequence.issue();
        assert!(sequence.accept(next));
    }
}
