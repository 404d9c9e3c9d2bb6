use std::collections::BTreeMap;
use std::fmt;

/// Field-scoped validation messages. Empty means the draft is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, String>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: F) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.0.keys().copied()
    }
}

/// Input buffer behind one form.
pub trait Draft: Clone + Default {
    type Field: Copy + Ord + fmt::Debug + 'static;
    type Request;

    /// Stores `value`; returns whether the field actually changed.
    fn set_field(&mut self, field: Self::Field, value: &str) -> bool;

    fn field_value(&self, field: Self::Field) -> String;

    fn validate(&self) -> FieldErrors<Self::Field>;

    /// Validated payload for the gateway.
    fn to_request(&self) -> Result<Self::Request, FieldErrors<Self::Field>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart<R> {
    /// Form closed or a submission already in flight.
    Ignored,
    Invalid,
    Ready(R),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Invalid,
    Saved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D: Draft> {
    open: bool,
    submitting: bool,
    draft: D,
    errors: FieldErrors<D::Field>,
}

impl<D: Draft> Default for FormState<D> {
    fn default() -> Self {
        Self {
            open: false,
            submitting: false,
            draft: D::default(),
            errors: FieldErrors::default(),
        }
    }
}

impl<D: Draft> FormState<D> {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors<D::Field> {
        &self.errors
    }

    pub fn draft_value(&self, field: D::Field) -> String {
        self.draft.field_value(field)
    }

    pub fn error(&self, field: D::Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Opens with a fresh draft. Re-opening an open form keeps its input.
    pub fn open(&mut self) {
        if !self.open {
            *self = Self {
                open: true,
                ..Self::default()
            };
        }
    }

    /// Closes and discards the draft. Refused while a submission is in
    /// flight; its outcome still belongs to this draft.
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Updates one field; its error (if any) clears when the value changes.
    pub fn edit(&mut self, field: D::Field, value: &str) {
        if self.draft.set_field(field, value) {
            self.errors.remove(field);
        }
    }

    pub fn begin_submit(&mut self) -> SubmitStart<D::Request> {
        if !self.open || self.submitting {
            return SubmitStart::Ignored;
        }
        self.submitting = true;
        match self.draft.to_request() {
            Ok(request) => {
                self.errors.clear();
                SubmitStart::Ready(request)
            }
            Err(errors) => {
                self.errors = errors;
                self.submitting = false;
                SubmitStart::Invalid
            }
        }
    }

    /// Success closes the form; failure keeps the input for another try.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            *self = Self::default();
        } else {
            self.submitting = false;
        }
    }
}
