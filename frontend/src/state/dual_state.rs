use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DualState<T> {
    external: Option<T>,
    internal: T,
}

/// `store` is only set when no external value is bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Write<T> {
    pub notify: T,
    pub store: Option<T>,
}

impl<T: Clone> DualState<T> {
    pub fn new(external: Option<T>, internal: T) -> Self {
        Self { external, internal }
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    pub fn value(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    pub fn write(&self, next: T) -> Write<T> {
        Write {
            store: (!self.is_controlled()).then(|| next.clone()),
            notify: next,
        }
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Write<T> {
        self.write(f(self.value()))
    }

    #[cfg(test)]
    pub fn apply(&mut self, write: &Write<T>) {
        if let Some(stored) = &write.store {
            self.internal = stored.clone();
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DualStateHandle<T: Clone + PartialEq + 'static> {
    pub value: T,
    binding: DualState<T>,
    internal: UseStateHandle<T>,
    on_change: Option<Callback<T>>,
}

impl<T: Clone + PartialEq + 'static> DualStateHandle<T> {
    pub fn set(&self, next: T) {
        self.commit(self.binding.write(next));
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        self.commit(self.binding.update(f));
    }

    fn commit(&self, write: Write<T>) {
        if let Some(stored) = write.store {
            self.internal.set(stored);
        }
        if let Some(on_change) = &self.on_change {
            on_change.emit(write.notify);
        }
    }

    pub fn setter(&self) -> Callback<T> {
        let handle = self.clone();
        Callback::from(move |next: T| handle.set(next))
    }
}

#[hook]
pub fn use_dual_state<T>(external: Option<T>, default: T, on_change: Option<Callback<T>>) -> DualStateHandle<T>
where
    T: Clone + PartialEq + 'static,
{
    let internal = use_state(move || default);
    let binding = DualState::new(external, (*internal).clone());
    DualStateHandle {
        value: binding.value().clone(),
        binding,
        internal,
        on_change,
    }
}
