//! Presentation-side list adapter: reconciles, dispatches, signals empty state, routes clicks
use crate::config::ReconcilerConfig;
use crate::errors::ReconcilerError;
use crate::reconciler::Reconciler;
use crate::row::LiveEventRow;
use crate::sink::{OperationSink, dispatch_all};
use crate::types::LiveEvent;

/// Notified when a displayed row is activated.
pub trait OnItemClickListener<T> {
    fn on_item_click(&mut self, position: usize, data: &T);
}

impl<T, F> OnItemClickListener<T> for F
where
    F: FnMut(usize, &T),
{
    fn on_item_click(&mut self, position: usize, data: &T) {
        self(position, data)
    }
}

pub struct LiveEventListAdapter<S: OperationSink> {
    reconciler: Reconciler,
    sink: S,
    on_item_click: Option<Box<dyn OnItemClickListener<LiveEvent>>>,
    empty_state: Option<Box<dyn FnMut(bool)>>,
}

impl<S: OperationSink> LiveEventListAdapter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(ReconcilerConfig::default(), sink)
    }

    pub fn with_config(config: ReconcilerConfig, sink: S) -> Self {
        LiveEventListAdapter {
            reconciler: Reconciler::with_config(config),
            sink,
            on_item_click: None,
            empty_state: None,
        }
    }

    pub fn set_on_item_click_listener<L>(&mut self, listener: L)
    where
        L: OnItemClickListener<LiveEvent> + 'static,
    {
        self.on_item_click = Some(Box::new(listener));
    }

    /// `observer(true)` means nothing is displayed. Fired after every submitted list.
    pub fn set_empty_state_observer<F>(&mut self, observer: F)
    where
        F: FnMut(bool) + 'static,
    {
        self.empty_state = Some(Box::new(observer));
    }

    pub fn submit_list(&mut self, items: Vec<LiveEvent>) {
        let operations = self.reconciler.submit_list(items);
        dispatch_all(&operations, &mut self.sink);
        self.check_empty();
    }

    pub fn add_items(&mut self, items: Option<Vec<LiveEvent>>) {
        if let Some(operations) = self.reconciler.add_items(items) {
            dispatch_all(&operations, &mut self.sink);
            self.check_empty();
        }
    }

    fn check_empty(&mut self) {
        let is_empty = self.reconciler.is_empty();
        if let Some(observer) = self.empty_state.as_mut() {
            observer(is_empty);
        }
    }

    pub fn item_count(&self) -> usize {
        self.reconciler.items().len()
    }

    pub fn items(&self) -> &[LiveEvent] {
        self.reconciler.items()
    }

    pub fn item(&self, position: usize) -> Option<&LiveEvent> {
        self.reconciler.items().get(position)
    }

    pub fn row(&self, position: usize) -> Option<LiveEventRow> {
        self.item(position).map(LiveEventRow::bind)
    }

    pub fn click(&mut self, position: usize) -> Result<(), ReconcilerError> {
        let items = self.reconciler.items();
        let item = items.get(position).ok_or(ReconcilerError::InvalidPosition {
            position,
            len: items.len(),
        })?;
        if let Some(listener) = self.on_item_click.as_mut() {
            listener.on_item_click(position, item);
        }
        Ok(())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
