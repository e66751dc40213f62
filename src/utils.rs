use crate::stream::PushBackable;
use core::marker;
use futures::{Stream, StreamExt};

/// Drops the `\n` of a `\r\n` pair. Any other byte is left in the stream.
///
/// Returns `None` if the stream ends first.
pub(crate) async fn skip_line_feed<S>(input: &mut S) -> Option<()>
where
    S: Stream<Item = u8> + marker::Unpin + PushBackable<Item = <S as Stream>::Item>,
{
    let b = input.next().await?;
    if b != b'\n' {
        input.push_back(b);
    }
    Some(())
}
