use core::fmt;

/// Construction failure: the requested slot count cannot back a FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-impl", derive(defmt::Format))]
pub enum Error {
    /// A FIFO needs at least one slot.
    ZeroCapacity,
    /// The slot count must be a power of two so that the pointers can wrap
    /// with a bit mask.
    NotPowerOfTwo(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "fifo capacity must be at least 1 slot"),
            Error::NotPowerOfTwo(n) => {
                write!(f, "fifo capacity must be a power of two, got {}", n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_capacity() {
        assert_eq!(
            Error::NotPowerOfTwo(6).to_string(),
            "fifo capacity must be a power of two, got 6"
        );
        assert_eq!(
            Error::ZeroCapacity.to_string(),
            "fifo capacity must be at least 1 slot"
        );
    }
}
