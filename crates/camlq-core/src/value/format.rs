use camlq_primitives::ValueType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

///
/// CamlValue
///
/// A typed scalar that knows its markup value type and its invariant
/// text form. Used by the typed predicate builders.
///

pub trait CamlValue {
    const VALUE_TYPE: ValueType;

    fn to_caml_text(&self) -> String;
}

impl<T: CamlValue + ?Sized> CamlValue for &T {
    const VALUE_TYPE: ValueType = T::VALUE_TYPE;

    fn to_caml_text(&self) -> String {
        (**self).to_caml_text()
    }
}

impl CamlValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn to_caml_text(&self) -> String {
        let flag = if *self { "1" } else { "0" };
        flag.to_string()
    }
}

macro_rules! impl_integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CamlValue for $ty {
                const VALUE_TYPE: ValueType = ValueType::Integer;

                fn to_caml_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_number_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CamlValue for $ty {
                const VALUE_TYPE: ValueType = ValueType::Number;

                fn to_caml_text(&self) -> String {
                    if self.is_infinite() {
                        let symbol = if self.is_sign_positive() { "Infinity" } else { "-Infinity" };
                        return symbol.to_string();
                    }

                    self.to_string()
                }
            }
        )*
    };
}

impl_number_value!(f32, f64);

impl CamlValue for str {
    const VALUE_TYPE: ValueType = ValueType::Text;

    fn to_caml_text(&self) -> String {
        self.to_string()
    }
}

impl CamlValue for String {
    const VALUE_TYPE: ValueType = ValueType::Text;

    fn to_caml_text(&self) -> String {
        self.clone()
    }
}

impl CamlValue for NaiveDateTime {
    const VALUE_TYPE: ValueType = ValueType::DateTime;

    fn to_caml_text(&self) -> String {
        format_iso8601(*self)
    }
}

impl CamlValue for NaiveDate {
    const VALUE_TYPE: ValueType = ValueType::DateTime;

    fn to_caml_text(&self) -> String {
        format_iso8601(self.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> CamlValue for DateTime<Tz> {
    const VALUE_TYPE: ValueType = ValueType::DateTime;

    fn to_caml_text(&self) -> String {
        format_iso8601(self.naive_utc())
    }
}

/// Format a timestamp the way list stores expect date values:
/// `YYYY-MM-DDTHH:MM:SSZ`, seconds precision.
#[must_use]
pub fn format_iso8601(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
