use futures::Stream;

pub(crate) trait MyStreamExt: Stream {
    fn push_backable(self) -> pushback::PushBack<Self>
    where
        Self: Sized,
    {
        pushback::PushBack::new(self)
    }
}
impl<T: ?Sized> MyStreamExt for T where T: Stream {}

/// A stream that can be handed back one item it already produced.
pub(crate) trait PushBackable {
    type Item;
    /// Returns the previously pushed back item if it was never read.
    fn push_back(&mut self, v: Self::Item) -> Option<Self::Item>;
}

pub(crate) mod pushback {
    use futures::Stream;
    use pin_project_lite::pin_project;

    use core::pin::Pin;
    use core::task::{Context, Poll};

    use super::PushBackable;

    pin_project! {
        pub(crate) struct PushBack<S: Stream> {
            #[pin]
            stream: S,
            head: Option<S::Item>,
        }
    }

    impl<S: Stream> PushBack<S> {
        pub fn new(stream: S) -> Self {
            Self { stream, head: None }
        }
    }

    impl<S: Stream> PushBackable for PushBack<S> {
        type Item = S::Item;
        fn push_back(&mut self, v: S::Item) -> Option<S::Item> {
            self.head.replace(v)
        }
    }

    impl<S: Stream> Stream for PushBack<S> {
        type Item = S::Item;

        fn poll_next(self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Option<S::Item>> {
            let this = self.project();
            match this.head.take() {
                Some(head) => Poll::Ready(Some(head)),
                None => this.stream.poll_next(ctx),
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            let extra = usize::from(self.head.is_some());
            let (low, high) = self.stream.size_hint();
            (
                low.saturating_add(extra),
                high.and_then(|high| high.checked_add(extra)),
            )
        }
    }

}
