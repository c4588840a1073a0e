macro_rules! nutype_string {
    ($(#[doc = $doc:literal])* $ident:ident($($arg:tt)*)) => {
        $(#[doc = $doc])*
        #[::nutype::nutype(
            $($arg)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
