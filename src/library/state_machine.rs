use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Elm-style runtime driven from the UI thread.
///
/// `transition_fn` is pure and runs on the caller's thread. Effects run on
/// spawned threads and report back through the event channel, which the
/// owner drains with [`StateMachine::poll`] once per frame.
pub struct StateMachine<TState, TEvent, TEffect, T, E>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
{
    state: TState,
    transition_fn: Arc<T>,
    run_effect_fn: Arc<E>,
    event_sender: Sender<TEvent>,
    event_receiver: Receiver<TEvent>,
    _effect: PhantomData<TEffect>,
}

impl<TState, TEvent, TEffect, T, E> StateMachine<TState, TEvent, TEffect, T, E>
where
    TState: Clone,
    TEvent: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
{
    pub fn new(init: (TState, Vec<TEffect>), transition_fn: T, run_effect_fn: E) -> Self {
        let (event_sender, event_receiver) = channel();
        let (state, effects) = init;

        let machine = Self {
            state,
            transition_fn: Arc::new(transition_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            event_sender,
            event_receiver,
            _effect: PhantomData,
        };

        machine.spawn_effects(effects);

        machine
    }

    pub fn state(&self) -> &TState {
        &self.state
    }

    pub fn dispatch(&mut self, event: TEvent) {
        let effects = self.step(event);
        self.spawn_effects(effects);
    }

    /// Runs the resulting effects on the current thread before returning.
    /// Used during teardown, when spawned work might outlive the owner.
    pub fn dispatch_inline(&mut self, event: TEvent) {
        let effects = self.step(event);
        for effect in effects {
            (self.run_effect_fn)(effect, self.event_sender.clone());
        }
    }

    /// Feeds every pending event through the transition. Returns how many
    /// events were processed.
    pub fn poll(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            processed += 1;
        }
        processed
    }

    fn step(&mut self, event: TEvent) -> Vec<TEffect> {
        let (new_state, effects) = (self.transition_fn)(self.state.clone(), event);
        self.state = new_state;
        effects
    }

    fn spawn_effects(&self, effects: Vec<TEffect>) {
        for effect in effects {
            let effect_sender = self.event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            std::thread::spawn(move || {
                run_effect_fn(effect, effect_sender);
            });
        }
    }
}
