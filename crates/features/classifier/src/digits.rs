/// `u64::MAX` has 20 decimal digits.
const MAX_DIGITS: usize = 20;

/// Decimal digits of a number, most significant first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Digits {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl Digits {
    pub(crate) fn of(mut value: u64) -> Self {
        let mut buf = [0; MAX_DIGITS];
        let mut start = MAX_DIGITS;
        loop {
            start -= 1;
            buf[start] = u8::try_from(value % 10).unwrap_or(u8::MIN);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { buf, start }
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    pub(crate) fn first(&self) -> u8 {
        self.buf[self.start]
    }

    pub(crate) fn last(&self) -> u8 {
        self.buf[MAX_DIGITS - 1]
    }

    pub(crate) fn sum(&self) -> u64 {
        self.as_slice().iter().map(|&d| u64::from(d)).sum()
    }

    pub(crate) fn product(&self) -> u64 {
        self.as_slice().iter().map(|&d| u64::from(d)).product()
    }

    pub(crate) fn square_sum(&self) -> u64 {
        self.as_slice().iter().map(|&d| u64::from(d) * u64::from(d)).sum()
    }
}
