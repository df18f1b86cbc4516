//! Call signatures and argument binding.
//!
//! A [`Signature`] is the declared parameter list of a callable. Binding
//! matches the actual [`Args`] of one call against it:
//!
//! 1. Positional values fill positional parameters left to right; any
//!    surplus is collected into the variadic positional parameter as a
//!    `tuple`, or rejected.
//! 2. Keyword values fill the remaining parameters by name; unknown names
//!    are collected into the variadic keyword parameter as a `dict`, or
//!    rejected.
//! 3. Every parameter left without a value must have a default.
//!
//! Defaults are not inserted by [`Signature::bind`], so the bound arguments
//! hold exactly what the caller passed. [`BoundArguments::apply_defaults`]
//! fills in the rest when a callable body needs every parameter present.

use std::fmt;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tych_value::Value;

use crate::errors::{BindingError, SignatureError};

/// How a parameter accepts its argument. Declaration order follows this order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKind {
    PositionalOnly,
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

impl ParamKind {
    pub fn is_variadic(self) -> bool {
        matches!(self, ParamKind::VarPositional | ParamKind::VarKeyword)
    }

    fn accepts_positional(self) -> bool {
        matches!(
            self,
            ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword
        )
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::PositionalOnly => "positional-only",
            ParamKind::PositionalOrKeyword => "positional or keyword",
            ParamKind::VarPositional => "variadic positional",
            ParamKind::KeywordOnly => "keyword-only",
            ParamKind::VarKeyword => "variadic keyword",
        })
    }
}

/// One declared parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
    pub default: Option<Value>,
}

impl Param {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Param {
            name: name.into(),
            kind,
            default: None,
        }
    }

    /// A parameter that may be passed by position or by name.
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::PositionalOrKeyword)
    }

    pub fn positional_only(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::PositionalOnly)
    }

    pub fn var_positional(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::VarPositional)
    }

    pub fn keyword_only(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::KeywordOnly)
    }

    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::VarKeyword)
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// An ordered, validated parameter list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signature {
    params: SmallVec<[Param; 4]>,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Validate and build a signature from parameters in declaration order.
    pub fn new(params: impl IntoIterator<Item = Param>) -> Result<Self, SignatureError> {
        let params: SmallVec<[Param; 4]> = params.into_iter().collect();
        validate(&params)?;
        Ok(Signature { params })
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    /// Match call arguments to parameter names.
    pub fn bind(&self, args: &Args) -> Result<BoundArguments, BindingError> {
        let mut seen = FxHashSet::default();
        for (name, _) in &args.keywords {
            if !seen.insert(name.as_str()) {
                return Err(BindingError::RepeatedKeyword { name: name.clone() });
            }
        }

        let mut slots: SmallVec<[Option<Value>; 8]> = SmallVec::from_elem(None, self.params.len());
        let mut positional = args.positional.iter();
        let mut next_param = 0;

        // Positional phase
        while let Some(param) = self.params.get(next_param) {
            if param.kind == ParamKind::VarPositional {
                let rest: Vec<Value> = positional.by_ref().cloned().collect();
                if !rest.is_empty() {
                    slots[next_param] = Some(Value::tuple(rest));
                }
                break;
            }
            if !param.kind.accepts_positional() {
                break;
            }
            let Some(value) = positional.next() else {
                break;
            };
            if param.kind != ParamKind::PositionalOnly && seen.contains(param.name.as_str()) {
                return Err(BindingError::MultipleValues {
                    name: param.name.clone(),
                });
            }
            slots[next_param] = Some(value.clone());
            next_param += 1;
        }
        if positional.next().is_some() {
            return Err(BindingError::TooManyPositional);
        }

        // Keyword phase
        let var_keyword = self
            .params
            .iter()
            .position(|p| p.kind == ParamKind::VarKeyword);
        let mut extra: Vec<(String, Value)> = Vec::new();
        for (name, value) in &args.keywords {
            match self.index_of(name) {
                Some(i) if self.params[i].kind.is_variadic() => {
                    // Names of variadic parameters are not keywords
                    extra.push((name.clone(), value.clone()));
                }
                Some(i) if self.params[i].kind == ParamKind::PositionalOnly => {
                    if var_keyword.is_some() {
                        extra.push((name.clone(), value.clone()));
                    } else {
                        return Err(BindingError::PositionalOnlyAsKeyword { name: name.clone() });
                    }
                }
                Some(i) => {
                    if slots[i].is_some() {
                        return Err(BindingError::MultipleValues { name: name.clone() });
                    }
                    slots[i] = Some(value.clone());
                }
                None => extra.push((name.clone(), value.clone())),
            }
        }

        for (param, slot) in self.params.iter().zip(&slots) {
            if slot.is_none() && !param.kind.is_variadic() && param.default.is_none() {
                return Err(BindingError::MissingArgument {
                    name: param.name.clone(),
                });
            }
        }

        if !extra.is_empty() {
            let Some(kw) = var_keyword else {
                let (name, _) = extra.swap_remove(0);
                return Err(BindingError::UnexpectedKeyword { name });
            };
            slots[kw] = Some(Value::dict(extra));
        }

        let arguments = self
            .params
            .iter()
            .zip(slots)
            .filter_map(|(param, slot)| slot.map(|value| (param.name.clone(), value)))
            .collect();
        Ok(BoundArguments { arguments })
    }
}

fn validate(params: &[Param]) -> Result<(), SignatureError> {
    let mut names = FxHashSet::default();
    let mut top_kind = ParamKind::PositionalOnly;
    let mut seen_default = false;

    for param in params {
        if !names.insert(param.name.as_str()) {
            return Err(SignatureError::DuplicateName {
                name: param.name.clone(),
            });
        }
        if param.kind < top_kind {
            return Err(SignatureError::WrongOrder {
                name: param.name.clone(),
                kind: param.kind,
                after: top_kind,
            });
        }
        if param.kind == top_kind && param.kind.is_variadic() {
            return Err(SignatureError::DuplicateVariadic {
                name: param.name.clone(),
                kind: param.kind,
            });
        }
        if param.kind.is_variadic() && param.default.is_some() {
            return Err(SignatureError::VariadicDefault {
                name: param.name.clone(),
                kind: param.kind,
            });
        }
        if param.kind.accepts_positional() {
            if param.default.is_some() {
                seen_default = true;
            } else if seen_default {
                return Err(SignatureError::NonDefaultAfterDefault {
                    name: param.name.clone(),
                });
            }
        }
        top_kind = param.kind;
    }
    Ok(())
}

/// Incremental construction of a [`Signature`].
#[derive(Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
}

impl SignatureBuilder {
    #[must_use]
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn build(self) -> Result<Signature, SignatureError> {
        Signature::new(self.params)
    }
}

/// The arguments of one call: positional values, then named values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    positional: SmallVec<[Value; 4]>,
    keywords: SmallVec<[(String, Value); 2]>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> &[(String, Value)] {
        &self.keywords
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Args {
            positional: iter.into_iter().collect(),
            keywords: SmallVec::new(),
        }
    }
}

/// Parameter names mapped to the values a call supplied, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundArguments {
    arguments: Vec<(String, Value)>,
}

impl BoundArguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// The bound value, or `None` when the parameter has no value.
    pub fn value(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::None)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.arguments.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Fill unbound parameters: defaults where declared, an empty `tuple` or
    /// `dict` for variadic parameters.
    pub fn apply_defaults(&mut self, signature: &Signature) {
        let mut bound = std::mem::take(&mut self.arguments).into_iter().peekable();
        let mut out = Vec::with_capacity(signature.params().len());
        for param in signature.params() {
            if bound.peek().is_some_and(|(name, _)| *name == param.name) {
                out.extend(bound.next());
                continue;
            }
            let fallback = match (param.kind, &param.default) {
                (ParamKind::VarPositional, _) => Value::tuple(Vec::new()),
                (ParamKind::VarKeyword, _) => Value::dict(Vec::new()),
                (_, Some(default)) => default.clone(),
                (_, None) => continue,
            };
            out.push((param.name.clone(), fallback));
        }
        self.arguments = out;
    }
}
