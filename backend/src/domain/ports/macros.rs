//! Helper macro for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        // No `Eq`: some variants carry float fields.
        #[derive(Debug, Clone, PartialEq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable => "store unreachable",
            Query { message: String } => "query failed: {message}",
            Stale { expected: i64, actual: i64 } => "stale read: expected {expected}, got {actual}",
        }
    }

    #[test]
    fn unit_variant_constructor() {
        assert_eq!(
            SamplePortError::unreachable().to_string(),
            "store unreachable"
        );
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::query("no such table");
        assert_eq!(err.to_string(), "query failed: no such table");
    }

    #[test]
    fn mixed_fields_format_in_order() {
        let err = SamplePortError::stale(3_i64, 7_i64);
        assert_eq!(err.to_string(), "stale read: expected 3, got 7");
    }

    define_port_error! {
        pub enum FloatPortError {
            OutOfRange { latitude: f64, longitude: f64 } =>
                "out of range: {latitude}, {longitude}",
        }
    }

    #[test]
    fn float_fields_are_supported() {
        let err = FloatPortError::out_of_range(95.0_f64, 76.27_f64);
        assert_eq!(err.to_string(), "out of range: 95, 76.27");
        assert_eq!(err, FloatPortError::out_of_range(95.0_f64, 76.27_f64));
    }
}
