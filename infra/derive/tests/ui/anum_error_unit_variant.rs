use anum_derive::anum_error;

#[anum_error]
pub enum LookupError {
    #[error("Nothing here")]
    Missing,

    #[error("Wrong name: {name}")]
    Wrong { name: String },
}

fn main() {
    assert_eq!(LookupError::Missing.to_string(), "Nothing here");
    let wrong = LookupError::Wrong { name: "x".to_owned() };
    assert_eq!(wrong.to_string(), "Wrong name: x");
}
