//! [`Render`] and [`RenderKey`] implementations for standard library types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::{MapKey, Render, RenderKey, ValueKind, mapping_of, sequence_of};
use crate::Scalar;

macro_rules! render_numbers {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Render for $ty {
                fn kind(&self) -> ValueKind<'_> {
                    ValueKind::Scalar(Scalar::$variant(*self))
                }

                fn is_empty_value(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )*
    };
}

render_numbers!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
);

impl Render for f32 {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Scalar(Scalar::F32(*self))
    }

    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl Render for f64 {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Scalar(Scalar::F64(*self))
    }

    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl Render for bool {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Scalar(Scalar::Bool(*self))
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }
}

impl Render for char {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Scalar(Scalar::Str(self.to_string()))
    }
}

impl Render for str {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Scalar(Scalar::Str(self.to_owned()))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Render for String {
    fn kind(&self) -> ValueKind<'_> {
        self.as_str().kind()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Render for Cow<'_, str> {
    fn kind(&self) -> ValueKind<'_> {
        self.as_ref().kind()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Whole seconds render as `U64`; anything finer as fractional `F64`.
impl Render for Duration {
    fn kind(&self) -> ValueKind<'_> {
        if self.subsec_nanos() == 0 {
            ValueKind::Scalar(Scalar::U64(self.as_secs()))
        } else {
            ValueKind::Scalar(Scalar::F64(self.as_secs_f64()))
        }
    }

    fn is_empty_value(&self) -> bool {
        self.is_zero()
    }
}

impl<T: Render> Render for Option<T> {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Indirect(self.as_ref().map(|inner| inner as &dyn Render))
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

macro_rules! render_transparent {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Render + ?Sized> Render for $wrapper<T> {
                fn kind(&self) -> ValueKind<'_> {
                    (**self).kind()
                }

                fn is_empty_value(&self) -> bool {
                    (**self).is_empty_value()
                }
            }
        )*
    };
}

render_transparent!(Box, Rc, Arc);

impl<T: Render + ?Sized> Render for &T {
    fn kind(&self) -> ValueKind<'_> {
        (**self).kind()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Render> Render for [T] {
    fn kind(&self) -> ValueKind<'_> {
        sequence_of(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn kind(&self) -> ValueKind<'_> {
        sequence_of(self)
    }

    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T: Render> Render for Vec<T> {
    fn kind(&self) -> ValueKind<'_> {
        sequence_of(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Render> Render for VecDeque<T> {
    fn kind(&self) -> ValueKind<'_> {
        sequence_of(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K: RenderKey, V: Render, S: BuildHasher> Render for HashMap<K, V, S> {
    fn kind(&self) -> ValueKind<'_> {
        mapping_of(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K: RenderKey, V: Render> Render for BTreeMap<K, V> {
    fn kind(&self) -> ValueKind<'_> {
        mapping_of(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl RenderKey for str {
    fn render_key(&self) -> MapKey<'_> {
        MapKey::Str(Cow::Borrowed(self))
    }
}

impl RenderKey for String {
    fn render_key(&self) -> MapKey<'_> {
        MapKey::Str(Cow::Borrowed(self.as_str()))
    }
}

impl RenderKey for Cow<'_, str> {
    fn render_key(&self) -> MapKey<'_> {
        MapKey::Str(Cow::Borrowed(self.as_ref()))
    }
}

impl<K: RenderKey + ?Sized> RenderKey for &K {
    fn render_key(&self) -> MapKey<'_> {
        (**self).render_key()
    }
}

macro_rules! non_string_keys {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderKey for $ty {
                fn render_key(&self) -> MapKey<'_> {
                    MapKey::Other(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

non_string_keys!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
