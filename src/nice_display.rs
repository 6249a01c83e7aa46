use std::fmt::{Debug, Display};

pub struct NiceError {
    content: String,
}

impl Display for NiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

// `main` returns this, and the runtime reports errors through `Debug`.
impl Debug for NiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failure;

    impl NiceDisplay for Failure {
        fn message(&self) -> String {
            "Error writing dataset: disk full".to_string()
        }
    }

    #[test]
    fn debug_reads_like_display() {
        let err = Failure.to_nice_error();
        assert_eq!(format!("{:?}", err), format!("{}", err));
        assert_eq!(format!("{:?}", err), "Error writing dataset: disk full");
    }
}

pub trait NiceDisplay {
    fn message(&self) -> String;
    fn to_nice_error(&self) -> NiceError {
        NiceError {
            content: self.message(),
        }
    }
}
