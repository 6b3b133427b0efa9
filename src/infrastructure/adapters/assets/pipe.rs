//! Asset Pipe - 阻塞复制
//!
//! 在阻塞线程中把资源内容写入管道写端，调用方持有读端

use std::io::{self, ErrorKind, Read, Write};

const BUFFER_SIZE: usize = 8192;

/// 复制全部内容到写端并刷新
///
/// 失败时记录日志；无论成功与否，两端都会在返回前关闭
pub fn copy_to_pipe<R, W>(mut reader: R, mut writer: W) -> io::Result<u64>
where
    R: Read,
    W: Write,
{
    let result = copy_all(&mut reader, &mut writer);
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Failure writing pipe");
    }
    drop(writer);
    drop(reader);
    result
}

fn copy_all<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let mut buf = [0u8; BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }

    writer.flush()?;
    Ok(total)
}
