// Generates the per-method registration shortcuts shared by `Router` and
// `Group`. The surrounding impl must provide `register`.
macro_rules! method_shortcuts {
    ($($name:ident => $method:literal),* $(,)?) => {$(
        #[doc = concat!("Registers a handler chain for `", $method, "` requests.")]
        pub fn $name(
            &mut self,
            pattern: &str,
            chain: impl IntoIterator<Item = Handler<C>>,
        ) -> Result<(), InsertError> {
            self.register($method, pattern, chain)
        }
    )*};
}
