//! Observable value that marshals writes onto the thread that owns it
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

type Observer<T> = Box<dyn FnMut(&T) + Send>;

struct Inner<T> {
    value: Option<T>,
    pending: VecDeque<T>,
    observers: Vec<Observer<T>>,
}

/// Writes from the owner thread apply immediately; writes from any other thread are
/// queued until the owner calls [`LiveData::dispatch_pending`]. Cloning shares the value.
pub struct LiveData<T> {
    inner: Arc<Mutex<Inner<T>>>,
    owner: ThreadId,
}

impl<T> Clone for LiveData<T> {
    fn clone(&self) -> Self {
        LiveData {
            inner: Arc::clone(&self.inner),
            owner: self.owner,
        }
    }
}

impl<T: Clone> LiveData<T> {
    /// The calling thread becomes the owner.
    pub fn new() -> Self {
        LiveData {
            inner: Arc::new(Mutex::new(Inner {
                value: None,
                pending: VecDeque::new(),
                observers: Vec::new(),
            })),
            owner: thread::current().id(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_owner_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    pub fn value(&self) -> Option<T> {
        self.lock().value.clone()
    }

    pub fn observe<F>(&self, observer: F)
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.lock().observers.push(Box::new(observer));
    }

    pub fn change_value(&self, value: T) {
        if self.is_owner_thread() {
            self.set_and_notify(value);
        } else {
            log::trace!("LiveData::change_value: posting from {:?}", thread::current().id());
            self.lock().pending.push_back(value);
        }
    }

    /// Applies queued values in arrival order. Returns how many were applied; always
    /// zero off the owner thread.
    pub fn dispatch_pending(&self) -> usize {
        if !self.is_owner_thread() {
            log::warn!("LiveData::dispatch_pending: called off the owner thread, ignoring");
            return 0;
        }
        let pending: Vec<T> = self.lock().pending.drain(..).collect();
        let applied = pending.len();
        for value in pending {
            self.set_and_notify(value);
        }
        applied
    }

    // Observers run without the lock held so they may read the value back
    fn set_and_notify(&self, value: T) {
        let mut observers = {
            let mut inner = self.lock();
            inner.value = Some(value.clone());
            std::mem::take(&mut inner.observers)
        };
        for observer in observers.iter_mut() {
            observer(&value);
        }
        let mut inner = self.lock();
        observers.append(&mut inner.observers);
        inner.observers = observers;
    }
}

impl<T: Clone> Default for LiveData<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn owner_writes_apply_immediately() {
        let data = LiveData::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        data.observe(move |_: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        data.change_value(7);
        assert_eq!(data.value(), Some(7));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(data.dispatch_pending(), 0);
    }

    #[test]
    fn foreign_writes_wait_for_dispatch() {
        let data: LiveData<String> = LiveData::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        data.observe(move |v: &String| log.lock().unwrap().push(v.clone()));

        let remote = data.clone();
        thread::spawn(move || {
            assert!(!remote.is_owner_thread());
            remote.change_value("first".to_string());
            remote.change_value("second".to_string());
            assert_eq!(remote.dispatch_pending(), 0);
        })
        .join()
        .unwrap();

        assert_eq!(data.value(), None);
        assert_eq!(data.dispatch_pending(), 2);
        assert_eq!(data.value(), Some("second".to_string()));
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn observers_can_read_back() {
        let data = LiveData::new();
        let reader = data.clone();
        let last = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last);
        data.observe(move |_: &i32| *sink.lock().unwrap() = reader.value());

        data.change_value(3);
        assert_eq!(*last.lock().unwrap(), Some(3));
    }
}
