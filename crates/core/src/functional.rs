use itertools::{Either, Itertools};

use crate::expected::Expected;

impl<T, E, V> FromIterator<Expected<T, E>> for Expected<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Expected<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Expected::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

pub fn sequence<T, E, I>(items: I) -> Expected<Vec<T>, E>
where
    I: IntoIterator<Item = Expected<T, E>>,
{
    items.into_iter().collect()
}

pub fn partition<T, E, I>(items: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Expected<T, E>>,
{
    items.into_iter().partition_map(|item| match item {
        Expected::Value(value) => Either::Left(value),
        Expected::Error(error) => Either::Right(error),
    })
}

pub fn compose<T, U, V, E>(
    f: impl Fn(T) -> Expected<U, E>,
    g: impl Fn(U) -> Expected<V, E>,
) -> impl Fn(T) -> Expected<V, E> {
    move |x| f(x).bind_expected(&g)
}

pub fn apply_binders<T, E, F>(item: T, binders: &[F]) -> Expected<T, E>
where
    F: Fn(T) -> Expected<T, E>,
{
    binders
        .iter()
        .fold(Expected::of_value(item), |acc, binder| acc.bind_expected(binder))
}
