/// Per-cycle trace message that is compiled out unless debug assertions are enabled.
macro_rules! trace {
	($($arg:tt)+) => {
		#[cfg(debug_assertions)]
		::log::trace!($($arg)+);
	};
}
