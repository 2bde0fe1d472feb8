use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use uuid::Uuid;

use crate::form::CustomerForm;

struct Slot {
    form: CustomerForm,
    touched: Instant,
}

/// Open create-customer forms, one per page instance.
///
/// Each form is owned exclusively by its slot; callers get `&mut` access only
/// inside [`FormRegistry::with_form`], so the lock is never held across an await.
pub struct FormRegistry {
    forms: Mutex<HashMap<Uuid, Slot>>,
    idle: Duration,
}

impl FormRegistry {
    pub fn new(idle: Duration) -> Self {
        Self {
            forms: Mutex::new(HashMap::new()),
            idle,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Slot>> {
        self.forms.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocates a fresh form, dropping idle ones that are not mid-submission.
    pub fn open(&self) -> Uuid {
        let mut forms = self.lock();
        let now = Instant::now();

        let before = forms.len();
        forms.retain(|_, slot| {
            slot.form.is_submitting() || now.duration_since(slot.touched) < self.idle
        });
        let pruned = before - forms.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Dropped idle customer forms");
        }

        let id = Uuid::new_v4();
        forms.insert(
            id,
            Slot {
                form: CustomerForm::new(),
                touched: now,
            },
        );
        id
    }

    /// Runs `f` against the form with this id; `None` when it does not exist.
    pub fn with_form<R>(&self, id: Uuid, f: impl FnOnce(&mut CustomerForm) -> R) -> Option<R> {
        let mut forms = self.lock();
        let slot = forms.get_mut(&id)?;
        slot.touched = Instant::now();
        Some(f(&mut slot.form))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
