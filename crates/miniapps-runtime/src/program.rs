#![forbid(unsafe_code)]

//! The Elm-architecture program loop.
//!
//! A [`Model`] owns all application state. The runtime feeds it messages
//! (converted terminal events plus subscription output), applies `update`,
//! reconciles subscriptions, and re-renders through a [`Surface`].
//!
//! All updates run on the main thread; background threads only push
//! messages into the channel. Handlers therefore run to completion with no
//! preemption, which is the whole concurrency model of this application.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use miniapps_core::event::Event;
use miniapps_core::geometry::Rect;
use miniapps_core::surface::Surface;
use miniapps_core::terminal_session::{SessionOptions, TerminalSession, install_signal_restore};

use crate::subscription::{StopSignal, StopTrigger, SubId, Subscription};

/// How long the input thread waits per poll before re-checking liveness.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long the main loop blocks waiting for a message.
const RECV_TIMEOUT: Duration = Duration::from_millis(250);

/// A side effect requested by `Model::update`.
pub enum Cmd<M> {
    /// No effect.
    None,
    /// Stop the program loop.
    Quit,
    /// Feed another message through `update`.
    Msg(M),
    /// Multiple effects, processed in order.
    Batch(Vec<Cmd<M>>),
}

impl<M> Cmd<M> {
    /// Convenience constructor for no effect.
    #[must_use]
    pub const fn none() -> Self {
        Cmd::None
    }
}

/// The application model driving the program loop.
pub trait Model: Sized {
    /// The message type for this model. Terminal events must convert into it.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with a startup effect.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state onto the surface within `area`.
    fn view(&self, surface: &mut Surface<&mut dyn io::Write>, area: Rect) -> io::Result<()>;

    /// Declare active subscriptions.
    ///
    /// Called after each `update()`. The runtime compares the returned set
    /// (by `SubId`) against running subscriptions and starts/stops as
    /// needed. Returning an empty vec stops everything.
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        vec![]
    }
}

/// Program configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Auto-quit after this long (None = run until quit).
    pub exit_after: Option<Duration>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            exit_after: None,
        }
    }
}

/// Errors from program startup or the render path.
#[derive(Debug)]
pub enum ProgramError {
    /// Terminal or render I/O failure.
    Io(io::Error),
    /// The message channel closed unexpectedly.
    ChannelClosed,
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ChannelClosed => write!(f, "message channel closed"),
        }
    }
}

impl std::error::Error for ProgramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ChannelClosed => None,
        }
    }
}

impl From<io::Error> for ProgramError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

struct SubscriptionHandle {
    trigger: StopTrigger,
    thread: Option<JoinHandle<()>>,
}

impl SubscriptionHandle {
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Running subscription threads, stopped on drop.
///
/// Holding the `Drop` impl here (rather than on `Program`) lets
/// `Program::into_model` move the model out of the program.
#[derive(Default)]
struct RunningSubs(HashMap<SubId, SubscriptionHandle>);

impl RunningSubs {
    fn stop_all(&mut self) {
        for (_, handle) in self.0.drain() {
            handle.stop();
        }
    }
}

impl Drop for RunningSubs {
    fn drop(&mut self) {
        self.stop_all();
    }
}

/// The program loop: owns the terminal session, the model, and all
/// subscription threads.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    // Declared before `session` so subscriptions stop before the
    // terminal is restored when the program is dropped.
    running_subs: RunningSubs,
    session: TerminalSession,
    sender: mpsc::Sender<M::Message>,
    receiver: mpsc::Receiver<M::Message>,
}

impl<M: Model> Program<M> {
    /// Set up the terminal and build a program.
    pub fn new(model: M) -> Result<Self, ProgramError> {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Set up the terminal with explicit configuration.
    pub fn with_config(model: M, config: ProgramConfig) -> Result<Self, ProgramError> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: config.alternate_screen,
        })?;
        install_signal_restore(config.alternate_screen)?;
        let (sender, receiver) = mpsc::channel();
        Ok(Self {
            model,
            config,
            session,
            sender,
            receiver,
            running_subs: RunningSubs::default(),
        })
    }

    /// Run until the model requests quit (or `exit_after` elapses).
    pub fn run(&mut self) -> Result<(), ProgramError> {
        spawn_input_thread(self.sender.clone())?;

        let started = Instant::now();
        let init_cmd = self.model.init();
        let mut quit = self.apply_cmd(init_cmd);
        self.reconcile_subscriptions();
        self.render()?;

        while !quit {
            if let Some(limit) = self.config.exit_after
                && started.elapsed() >= limit
            {
                tracing::info!("exit-after limit reached");
                break;
            }

            let msg = match self.receiver.recv_timeout(RECV_TIMEOUT) {
                Ok(msg) => msg,
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return Err(ProgramError::ChannelClosed);
                }
            };

            quit = self.process_message(msg);

            // Drain whatever else is already queued before repainting.
            while !quit {
                match self.receiver.try_recv() {
                    Ok(msg) => quit = self.process_message(msg),
                    Err(_) => break,
                }
            }

            self.reconcile_subscriptions();
            self.render()?;
        }

        self.stop_all_subscriptions();
        Ok(())
    }

    /// Consume the program, returning the final model state.
    pub fn into_model(self) -> M {
        self.model
    }

    fn process_message(&mut self, msg: M::Message) -> bool {
        let cmd = self.model.update(msg);
        self.apply_cmd(cmd)
    }

    /// Apply a command tree; returns `true` if quit was requested.
    fn apply_cmd(&mut self, cmd: Cmd<M::Message>) -> bool {
        let mut pending = vec![cmd];
        let mut quit = false;
        while let Some(cmd) = pending.pop() {
            match cmd {
                Cmd::None => {}
                Cmd::Quit => quit = true,
                Cmd::Msg(msg) => {
                    let next = self.model.update(msg);
                    pending.push(next);
                }
                Cmd::Batch(cmds) => {
                    // Reverse so the batch executes in declaration order.
                    pending.extend(cmds.into_iter().rev());
                }
            }
        }
        quit
    }

    fn reconcile_subscriptions(&mut self) {
        let active = self.model.subscriptions();
        let active_ids: Vec<SubId> = active.iter().map(|s| s.id()).collect();

        let stale: Vec<SubId> = self
            .running_subs
            .0
            .keys()
            .filter(|id| !active_ids.contains(id))
            .copied()
            .collect();
        for id in stale {
            if let Some(handle) = self.running_subs.0.remove(&id) {
                tracing::debug!(sub_id = id, "stopping subscription");
                handle.stop();
            }
        }

        for sub in active {
            let id = sub.id();
            if self.running_subs.0.contains_key(&id) {
                continue;
            }
            tracing::debug!(sub_id = id, "starting subscription");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();
            let thread = std::thread::Builder::new()
                .name(format!("miniapps-sub-{id}"))
                .spawn(move || sub.run(sender, signal));
            match thread {
                Ok(thread) => {
                    self.running_subs.0.insert(
                        id,
                        SubscriptionHandle {
                            trigger,
                            thread: Some(thread),
                        },
                    );
                }
                Err(e) => tracing::warn!(sub_id = id, error = %e, "failed to spawn subscription"),
            }
        }
    }

    fn stop_all_subscriptions(&mut self) {
        self.running_subs.stop_all();
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        let (width, height) = self.session.size()?;
        let area = Rect::new(0, 0, width, height);
        let mut stdout = io::stdout();
        let out: &mut dyn io::Write = &mut stdout;
        let mut surface = Surface::new(out);
        surface.clear()?;
        self.model.view(&mut surface, area)?;
        surface.flush()?;
        Ok(())
    }
}

fn spawn_input_thread<Msg>(sender: mpsc::Sender<Msg>) -> io::Result<()>
where
    Msg: From<Event> + Send + 'static,
{
    std::thread::Builder::new()
        .name("miniapps-input".into())
        .spawn(move || {
            loop {
                match crossterm::event::poll(INPUT_POLL_INTERVAL) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(raw) => {
                            if let Some(event) = Event::from_crossterm(raw)
                                && sender.send(Msg::from(event)).is_err()
                            {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "input read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "input poll failed");
                        break;
                    }
                }
            }
        })?;
    Ok(())
}
