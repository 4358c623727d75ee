//! Values that can be bound to a PostgreSQL statement built by the builder.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A bound parameter. Each variant reports its own Postgres type, so one
/// statement can mix BIGINT, TEXT and TEXT[] parameters without casts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
    TextArray(Vec<String>),
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::BigInt(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf),
            BindValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf),
            BindValue::TextArray(v) => <Vec<String> as Encode<Postgres>>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            BindValue::BigInt(_) => <i64 as Type<Postgres>>::type_info(),
            BindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            BindValue::TextArray(_) => <Vec<String> as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
            || <String as Type<Postgres>>::compatible(ty)
            || <Vec<String> as Type<Postgres>>::compatible(ty)
    }
}
