mod person;
mod record;
mod value;

pub use person::Person;
pub use record::FieldRecord;
pub use value::FieldValue;
