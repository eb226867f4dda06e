//! Test doubles shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kite_primitives::{BoxFutureLocal, DocPosition, PagePosition, ScreenPoint, ScrollType, VisiblePosition};
use lsp_types::Diagnostic;
use tokio::sync::oneshot;

use crate::action::{CodeAction, Command};
use crate::service::{ApplyCodeAction, ContextMenuDescriptor, ContextMenuService, EditorView};

pub(crate) fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

/// Presentation service that asks for the anchor before returning, the way
/// native context menus lay out synchronously.
#[derive(Default)]
pub(crate) struct EagerAnchorService {
	pub anchors: RefCell<Vec<ScreenPoint>>,
	pub shown: RefCell<Vec<ContextMenuDescriptor>>,
}

impl ContextMenuService for EagerAnchorService {
	fn show_context_menu(&self, mut descriptor: ContextMenuDescriptor) {
		self.anchors.borrow_mut().push(descriptor.resolve_anchor());
		self.shown.borrow_mut().push(descriptor);
	}
}

pub(crate) fn action(title: &str, with_diagnostics: bool) -> CodeAction {
	let action = CodeAction::new(title, Command::new(format!("cmd.{title}"), title));
	if with_diagnostics {
		action.with_diagnostics(vec![Diagnostic {
			message: format!("{title} diagnostic"),
			..Default::default()
		}])
	} else {
		action
	}
}

/// Editor stub recording layout calls.
///
/// Revealing a position moves the cursor there unless `pin_cursor` is set.
pub(crate) struct StubEditor {
	pub cursor: DocPosition,
	pub pin_cursor: bool,
	pub surface: PagePosition,
	pub visible: Option<VisiblePosition>,
	pub reveals: Vec<(DocPosition, ScrollType)>,
	pub renders: usize,
	pub queried: RefCell<Vec<DocPosition>>,
	/// Names of the layout calls in the order they were made.
	pub calls: RefCell<Vec<&'static str>>,
}

impl StubEditor {
	pub(crate) fn new(surface: PagePosition, visible: VisiblePosition) -> Self {
		Self {
			cursor: DocPosition::new(0, 0),
			pin_cursor: false,
			surface,
			visible: Some(visible),
			reveals: Vec::new(),
			renders: 0,
			queried: RefCell::default(),
			calls: RefCell::default(),
		}
	}

	pub(crate) fn untouched(&self) -> bool {
		self.reveals.is_empty() && self.renders == 0 && self.queried.borrow().is_empty()
	}
}

impl EditorView for StubEditor {
	fn position(&self) -> DocPosition {
		self.calls.borrow_mut().push("position");
		self.cursor
	}

	fn reveal_position(&mut self, pos: DocPosition, scroll: ScrollType) {
		self.calls.borrow_mut().push("reveal");
		self.reveals.push((pos, scroll));
		if !self.pin_cursor {
			self.cursor = pos;
		}
	}

	fn render(&mut self) {
		self.calls.borrow_mut().push("render");
		self.renders += 1;
	}

	fn scrolled_visible_position(&self, pos: DocPosition) -> Option<VisiblePosition> {
		self.calls.borrow_mut().push("visible");
		self.queried.borrow_mut().push(pos);
		self.visible
	}

	fn surface_page_position(&self) -> PagePosition {
		self.calls.borrow_mut().push("surface");
		self.surface
	}
}

/// How the recording applier settles.
pub(crate) enum Settle {
	Ok,
	Fail,
	/// Wait for the sender handed back by [`recording_applier`].
	Deferred,
}

pub(crate) struct AppliedLog {
	pub applied: RefCell<Vec<CodeAction>>,
	pub settled: Cell<usize>,
	pub release: RefCell<Option<oneshot::Sender<anyhow::Result<()>>>>,
}

pub(crate) fn recording_applier(settle: Settle) -> (ApplyCodeAction, Rc<AppliedLog>) {
	let log = Rc::new(AppliedLog {
		applied: RefCell::new(Vec::new()),
		settled: Cell::new(0),
		release: RefCell::new(None),
	});
	let settle = Rc::new(settle);
	let recorder = Rc::clone(&log);
	let apply: ApplyCodeAction = Rc::new(move |action: CodeAction| -> BoxFutureLocal<'static, anyhow::Result<()>> {
		recorder.applied.borrow_mut().push(action.clone());
		let log = Rc::clone(&recorder);
		let settle = Rc::clone(&settle);
		let deferred = match *settle {
			Settle::Deferred => {
				let (tx, rx) = oneshot::channel();
				*log.release.borrow_mut() = Some(tx);
				Some(rx)
			}
			_ => None,
		};
		Box::pin(async move {
			let result = match (&*settle, deferred) {
				(Settle::Ok, _) => Ok(()),
				(Settle::Fail, _) => Err(anyhow::anyhow!("workspace edit rejected: {}", action.title)),
				(Settle::Deferred, Some(rx)) => rx.await.unwrap_or_else(|_| Err(anyhow::anyhow!("release dropped"))),
				(Settle::Deferred, None) => unreachable!(),
			};
			log.settled.set(log.settled.get() + 1);
			result
		})
	});
	(apply, log)
}
