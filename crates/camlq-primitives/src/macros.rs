#[macro_export]
macro_rules! value_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Text, Textual, escape = Cdata, is_multi_value = false),
            (Integer, Numeric, escape = Verbatim, is_multi_value = false),
            (Choice, Textual, escape = Cdata, is_multi_value = false),
            (Boolean, Flag, escape = Verbatim, is_multi_value = false),
            (Number, Numeric, escape = Verbatim, is_multi_value = false),
            (DateTime, Temporal, escape = Verbatim, is_multi_value = false),
            (User, Reference, escape = Verbatim, is_multi_value = false),
            (UserMulti, Reference, escape = Verbatim, is_multi_value = true),
            (Lookup, Reference, escape = Verbatim, is_multi_value = false),
            (LookupMulti, Reference, escape = Verbatim, is_multi_value = true),
            (Note, Textual, escape = Cdata, is_multi_value = false),
            (Image, Reference, escape = Verbatim, is_multi_value = false),
            (Counter, Numeric, escape = Verbatim, is_multi_value = false),
            (ModStat, Status, escape = Verbatim, is_multi_value = false),
        }
    };
}

#[macro_export]
macro_rules! value_type_registry {
    ($macro:ident) => {
        $crate::value_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::value_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($variant:ident, $family:ident, escape = $escape:ident, is_multi_value = $multi:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ValueType::$variant => $crate::ValueTypeMetadata {
                    name: stringify!($variant),
                    family: $crate::ValueFamily::$family,
                    escape: $crate::EscapePolicy::$escape,
                    is_multi_value: $multi,
                },
            )*
        }
    };
}

macro_rules! all_types_from_registry {
    ( @entries $( ($variant:ident, $($rest:tt)*) ),* $(,)? ) => {
        [ $( $crate::ValueType::$variant ),* ]
    };
}
