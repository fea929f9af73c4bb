/// Reads a `$ty` from the big-endian prefix of the buffer using `$ty::from_be_bytes` and advances
/// the buffer. Evaluates to [`None`] without advancing if the buffer is too short.
#[macro_export]
macro_rules! try_from_be_bytes_and_advance_buf {
    ($ty:ty, $buf:expr) => {{
        const SIZE: usize = ::std::mem::size_of::<$ty>();
        let buf: &mut &[u8] = $buf;
        if buf.len() < SIZE {
            None
        } else {
            let mut arr = [0u8; SIZE];
            arr.copy_from_slice(&buf[..SIZE]);
            ::alloy_primitives::bytes::Buf::advance(buf, SIZE);
            Some(<$ty>::from_be_bytes(arr))
        }
    }};
}
