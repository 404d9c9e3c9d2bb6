#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest<T> {
    pub title: String,
    pub message: String,
    pub target: T,
}

/// Single slot for the destructive action awaiting a yes/no answer.
///
/// Opening while a request is pending replaces it without running its
/// cancel path. While a confirmed action is in flight (`busy`), new requests
/// and further confirms are refused.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmGate<T> {
    pending: Option<ConfirmRequest<T>>,
    busy: bool,
}

impl<T> Default for ConfirmGate<T> {
    fn default() -> Self {
        Self {
            pending: None,
            busy: false,
        }
    }
}

impl<T: Clone> ConfirmGate<T> {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending(&self) -> Option<&ConfirmRequest<T>> {
        self.pending.as_ref()
    }

    pub fn open(&mut self, request: ConfirmRequest<T>) -> bool {
        if self.busy {
            return false;
        }
        self.pending = Some(request);
        true
    }

    /// Marks the gate busy and hands out the target to act on.
    pub fn begin_confirm(&mut self) -> Option<T> {
        if self.busy {
            return None;
        }
        let target = self.pending.as_ref()?.target.clone();
        self.busy = true;
        Some(target)
    }

    /// Success clears the target; failure leaves it pending for a retry.
    pub fn finish_confirm(&mut self, succeeded: bool) {
        self.busy = false;
        if succeeded {
            self.pending = None;
        }
    }

    pub fn cancel(&mut self) -> Option<ConfirmRequest<T>> {
        self.pending.take()
    }
}
