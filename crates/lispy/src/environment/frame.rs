//! Call frames pushed for the duration of one closure body

use std::rc::Rc;

use super::{Environment, Frame, FrameRef, Scope};

/// An active call frame; popped when dropped.
///
/// The frame starts out holding the arguments of the call and is linked
/// to the frame the called closure was defined in.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use lispy::{Environment, Frame, Scope, Value};
///
/// let mut env = Environment::new();
/// let defining = Rc::new(Frame::new(Scope::new(), None));
/// defining.insert("base", Value::Number(10));
///
/// let args: Scope = [("n".to_string(), Value::Number(1))].into_iter().collect();
/// {
///     let call = env.call_frame(args, Some(defining));
///     assert_eq!(call.lookup("n").unwrap(), Value::Number(1));
///     assert_eq!(call.lookup("base").unwrap(), Value::Number(10));
/// }
/// assert!(env.is_global_scope());
/// ```
pub struct CallGuard<'a> {
    env: &'a mut Environment,
    frame: FrameRef,
}

impl Environment {
    /// Push a frame holding `args` under `parent`, popped when the guard drops.
    pub fn call_frame(&mut self, args: Scope, parent: Option<FrameRef>) -> CallGuard<'_> {
        let frame = Rc::new(Frame::new(args, parent));
        self.push_frame(Rc::clone(&frame));
        CallGuard { env: self, frame }
    }
}

impl CallGuard<'_> {
    /// The frame this guard pushed.
    pub fn frame(&self) -> &FrameRef {
        &self.frame
    }
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.env.pop_frame();
    }
}

impl std::ops::Deref for CallGuard<'_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl std::ops::DerefMut for CallGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn args(pairs: &[(&str, i64)]) -> Scope {
        pairs
            .iter()
            .map(|(name, n)| (name.to_string(), Value::Number(*n)))
            .collect()
    }

    #[test]
    fn test_arguments_seed_the_frame() {
        let mut env = Environment::new();
        let call = env.call_frame(args(&[("a", 7), ("b", 8)]), None);

        assert_eq!(call.frame().len(), 2);
        assert!(call.contains_in_current_scope("a"));
        assert_eq!(call.lookup("b"), Ok(Value::Number(8)));
    }

    #[test]
    fn test_arguments_shadow_defining_frame() {
        let mut env = Environment::new();
        let defining = Rc::new(Frame::new(args(&[("x", 1), ("y", 2)]), None));

        let call = env.call_frame(args(&[("x", 5)]), Some(Rc::clone(&defining)));
        assert_eq!(call.lookup("x"), Ok(Value::Number(5)));
        assert_eq!(call.lookup("y"), Ok(Value::Number(2)));
        assert_eq!(defining.get("x"), Some(Value::Number(1)));
    }

    #[test]
    fn test_pushed_frame_links_to_parent() {
        let mut env = Environment::new();
        let defining = Rc::new(Frame::new(Scope::new(), None));

        let call = env.call_frame(Scope::new(), Some(Rc::clone(&defining)));
        let parent = call.frame().parent().expect("parent link");
        assert!(Rc::ptr_eq(parent, &defining));
    }

    #[test]
    fn test_frame_kept_alive_by_capture() {
        let mut env = Environment::new();
        let kept = {
            let mut call = env.call_frame(args(&[("n", 3)]), None);
            call.bind_local("m", Value::Number(4));
            call.capture()
        };

        assert_eq!(env.depth(), 1);
        let kept = kept.expect("captured frame");
        assert_eq!(kept.get("n"), Some(Value::Number(3)));
        assert_eq!(kept.get("m"), Some(Value::Number(4)));
    }

    #[test]
    fn test_depth_tracks_nested_calls() {
        let mut env = Environment::new();
        let mut outer = env.call_frame(Scope::new(), None);
        {
            let inner = outer.call_frame(Scope::new(), None);
            assert_eq!(inner.depth(), 3);
        }
        assert_eq!(outer.depth(), 2);
    }
}
