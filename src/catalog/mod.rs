//! Built-in candidate functions, addressed as `<module> <function>`.
//!
//! A compiled binary cannot import arbitrary code by name, so the CLI looks
//! candidates up in this static registry instead. Each entry declares its
//! parameter shape; a few `demo` entries leave it undeclared to exercise the
//! probing path.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, VecDeque};
use std::hint::black_box;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::bench::Candidate;
use crate::domain::{Input, ParamShape};
use crate::error::{CallError, LookupError};

/// Fixed seed so shuffled inputs are identical across calls and runs.
const SHUFFLE_SEED: u64 = 0x5EED;

type Body = fn(&Input) -> Result<(), CallError>;

/// One registered candidate.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub module: &'static str,
    pub name: &'static str,
    pub shape: ParamShape,
    pub summary: &'static str,
    body: Body,
}

impl CatalogEntry {
    /// `module::name`, for messages.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }
}

impl Candidate for CatalogEntry {
    fn shape(&self) -> ParamShape {
        self.shape
    }

    fn call(&self, input: &Input) -> Result<(), CallError> {
        (self.body)(input)
    }
}

const fn entry(
    module: &'static str,
    name: &'static str,
    shape: ParamShape,
    summary: &'static str,
    body: Body,
) -> CatalogEntry {
    CatalogEntry {
        module,
        name,
        shape,
        summary,
        body,
    }
}

static CATALOG: &[CatalogEntry] = &[
    // demo: textbook shapes
    entry("demo", "constant", ParamShape::Scalar, "returns a constant", demo_constant),
    entry("demo", "logarithmic", ParamShape::Scalar, "halves n until 1", demo_logarithmic),
    entry("demo", "linear", ParamShape::Scalar, "counts to n", demo_linear),
    entry("demo", "quadratic", ParamShape::Scalar, "nested loop to n/10", demo_quadratic),
    entry("demo", "count_untyped", ParamShape::Unknown, "counts to n, shape undeclared", demo_count_untyped),
    entry("demo", "sum_untyped", ParamShape::Unknown, "sums a sequence, shape undeclared", demo_sum_untyped),
    // vec
    entry("vec", "sum", ParamShape::Sequence, "iterator sum", vec_sum),
    entry("vec", "contains", ParamShape::Sequence, "linear search for a missing value", vec_contains),
    entry("vec", "binary_search", ParamShape::Sequence, "binary search for every 64th element", vec_binary_search),
    entry("vec", "sort_unstable", ParamShape::Sequence, "sort a shuffled copy", vec_sort_unstable),
    entry("vec", "reverse", ParamShape::Sequence, "reverse a copy in place", vec_reverse),
    entry("vec", "insert_front", ParamShape::Sequence, "insert each element at index 0", vec_insert_front),
    // collections
    entry("collections", "hashmap_insert", ParamShape::Scalar, "insert n keys into a HashMap", hashmap_insert),
    entry("collections", "btreemap_insert", ParamShape::Scalar, "insert n keys into a BTreeMap", btreemap_insert),
    entry("collections", "binary_heap_push", ParamShape::Scalar, "push n ascending keys", binary_heap_push),
    entry("collections", "vecdeque_push_front", ParamShape::Scalar, "push_front n values", vecdeque_push_front),
    entry("collections", "btreeset_from_sequence", ParamShape::Sequence, "collect into a BTreeSet", btreeset_collect),
    // string
    entry("string", "repeat", ParamShape::Scalar, "\"ab\".repeat(n)", string_repeat),
    entry("string", "push_str", ParamShape::Scalar, "append n short slices", string_push_str),
    entry("string", "join", ParamShape::Sequence, "format and join every element", string_join),
];

/// All registered candidates, grouped by module in registration order.
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Distinct module names in registration order.
pub fn modules() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for e in CATALOG {
        if !out.contains(&e.module) {
            out.push(e.module);
        }
    }
    out
}

/// Find `module::function`.
pub fn lookup(module: &str, function: &str) -> Result<&'static CatalogEntry, LookupError> {
    if !CATALOG.iter().any(|e| e.module == module) {
        return Err(LookupError::UnknownModule {
            module: module.to_string(),
            available: modules().join(", "),
        });
    }
    CATALOG
        .iter()
        .find(|e| e.module == module && e.name == function)
        .ok_or_else(|| LookupError::UnknownFunction {
            module: module.to_string(),
            function: function.to_string(),
        })
}

fn scalar(input: &Input) -> Result<usize, CallError> {
    match input {
        Input::Scalar(n) => Ok(*n),
        Input::Sequence(_) => Err(CallError::TypeMismatch { expected: "integer" }),
    }
}

fn sequence(input: &Input) -> Result<&[i64], CallError> {
    match input {
        Input::Sequence(v) => Ok(v.as_slice()),
        Input::Scalar(_) => Err(CallError::TypeMismatch { expected: "sequence" }),
    }
}

fn demo_constant(input: &Input) -> Result<(), CallError> {
    black_box(scalar(input)?);
    black_box(42u64);
    Ok(())
}

fn demo_logarithmic(input: &Input) -> Result<(), CallError> {
    let mut n = black_box(scalar(input)?);
    let mut steps = 0u32;
    while n > 1 {
        n /= 2;
        steps += 1;
    }
    black_box(steps);
    Ok(())
}

fn demo_linear(input: &Input) -> Result<(), CallError> {
    count_to(scalar(input)?);
    Ok(())
}

fn demo_quadratic(input: &Input) -> Result<(), CallError> {
    let limit = scalar(input)? / 10;
    let mut s = 0u64;
    for i in 0..limit {
        for j in 0..limit {
            s = black_box(s.wrapping_add((i ^ j) as u64));
        }
    }
    black_box(s);
    Ok(())
}

fn demo_count_untyped(input: &Input) -> Result<(), CallError> {
    match input {
        Input::Scalar(n) => {
            count_to(*n);
            Ok(())
        }
        Input::Sequence(_) => Err(CallError::TypeMismatch { expected: "integer" }),
    }
}

fn demo_sum_untyped(input: &Input) -> Result<(), CallError> {
    let v = sequence(input)?;
    black_box(v.iter().sum::<i64>());
    Ok(())
}

fn count_to(n: usize) {
    let mut x = 0usize;
    for _ in 0..n {
        x = black_box(x + 1);
    }
    black_box(x);
}

fn vec_sum(input: &Input) -> Result<(), CallError> {
    let v = sequence(input)?;
    black_box(black_box(v).iter().sum::<i64>());
    Ok(())
}

fn vec_contains(input: &Input) -> Result<(), CallError> {
    let v = sequence(input)?;
    black_box(black_box(v).contains(&-1));
    Ok(())
}

fn vec_binary_search(input: &Input) -> Result<(), CallError> {
    let v = sequence(input)?;
    for probe in v.iter().step_by(64) {
        let _ = black_box(v.binary_search(black_box(probe)));
    }
    Ok(())
}

fn vec_sort_unstable(input: &Input) -> Result<(), CallError> {
    let mut v = sequence(input)?.to_vec();
    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    v.shuffle(&mut rng);
    v.sort_unstable();
    black_box(v);
    Ok(())
}

fn vec_reverse(input: &Input) -> Result<(), CallError> {
    let mut v = sequence(input)?.to_vec();
    v.reverse();
    black_box(v);
    Ok(())
}

fn vec_insert_front(input: &Input) -> Result<(), CallError> {
    let src = sequence(input)?;
    let mut v = Vec::with_capacity(src.len());
    for &x in src {
        v.insert(0, x);
    }
    black_box(v);
    Ok(())
}

fn hashmap_insert(input: &Input) -> Result<(), CallError> {
    let n = scalar(input)?;
    let mut m = HashMap::new();
    for i in 0..n {
        m.insert(i, i);
    }
    black_box(m);
    Ok(())
}

fn btreemap_insert(input: &Input) -> Result<(), CallError> {
    let n = scalar(input)?;
    let mut m = BTreeMap::new();
    for i in 0..n {
        m.insert(i, i);
    }
    black_box(m);
    Ok(())
}

fn binary_heap_push(input: &Input) -> Result<(), CallError> {
    let n = scalar(input)?;
    let mut h = BinaryHeap::new();
    for i in 0..n {
        h.push(i);
    }
    black_box(h);
    Ok(())
}

fn vecdeque_push_front(input: &Input) -> Result<(), CallError> {
    let n = scalar(input)?;
    let mut d = VecDeque::new();
    for i in 0..n {
        d.push_front(i);
    }
    black_box(d);
    Ok(())
}

fn btreeset_collect(input: &Input) -> Result<(), CallError> {
    let v = sequence(input)?;
    black_box(v.iter().copied().collect::<BTreeSet<i64>>());
    Ok(())
}

fn string_repeat(input: &Input) -> Result<(), CallError> {
    black_box("ab".repeat(scalar(input)?));
    Ok(())
}

fn string_push_str(input: &Input) -> Result<(), CallError> {
    let n = scalar(input)?;
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(black_box("xyz"));
    }
    black_box(s);
    Ok(())
}

fn string_join(input: &Input) -> Result<(), CallError> {
    let v = sequence(input)?;
    let parts: Vec<String> = v.iter().map(|x| x.to_string()).collect();
    black_box(parts.join(","));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::synthesize_sequence;

    #[test]
    fn lookup_finds_registered_entries() {
        let e = lookup("vec", "sort_unstable").unwrap();
        assert_eq!(e.shape, ParamShape::Sequence);
        assert_eq!(e.qualified_name(), "vec::sort_unstable");
    }

    #[test]
    fn lookup_errors_name_the_missing_item() {
        let err = lookup("nope", "sum").unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert!(err.to_string().contains("demo"));

        let err = lookup("vec", "nope").unwrap_err();
        assert_eq!(
            err,
            LookupError::UnknownFunction {
                module: "vec".to_string(),
                function: "nope".to_string()
            }
        );
    }

    #[test]
    fn names_are_unique_within_a_module() {
        let mut seen = std::collections::HashSet::new();
        for e in entries() {
            assert!(seen.insert((e.module, e.name)), "duplicate {}", e.qualified_name());
        }
        assert_eq!(modules(), vec!["demo", "vec", "collections", "string"]);
    }

    #[test]
    fn every_entry_accepts_its_declared_shape() {
        for e in entries() {
            let result = match e.shape {
                ParamShape::Scalar => e.call(&Input::Scalar(50)),
                ParamShape::Sequence => e.call(&Input::Sequence(synthesize_sequence(50))),
                ParamShape::Unknown => e
                    .call(&Input::Scalar(50))
                    .or_else(|_| e.call(&Input::Sequence(synthesize_sequence(50)))),
            };
            assert!(result.is_ok(), "{} failed: {result:?}", e.qualified_name());
        }
    }

    #[test]
    fn declared_entries_reject_the_other_shape() {
        let e = lookup("vec", "sum").unwrap();
        assert!(matches!(
            e.call(&Input::Scalar(3)),
            Err(CallError::TypeMismatch { .. })
        ));
        let e = lookup("demo", "sum_untyped").unwrap();
        assert!(matches!(
            e.call(&Input::Scalar(3)),
            Err(CallError::TypeMismatch { .. })
        ));
    }
}
