//! 文件系统能力：由调用方显式注入，便于测试时替换为内存实现

use std::{fs, io, path::Path};

/// 脚手架流程所需的最小文件系统接口
pub(crate) trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// 递归创建目录（已存在时视为成功）
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// 写入完整内容，覆盖已有文件
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// 真实磁盘
pub(crate) struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

#[cfg(test)]
pub(crate) use mem::MemFileSystem;
