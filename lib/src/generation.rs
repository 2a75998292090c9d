/// Tag attached to an issued request so its response can be matched against
/// the latest request on the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic per-axis request counter. Only the most recently issued
/// generation is current; responses for anything older are stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGenerations {
    latest: u64,
}

impl RequestGenerations {
    /// Issue the tag for a new request, making every earlier tag stale
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Make any in-flight request stale without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}
