//! Shared fixtures for unit tests.

/// A blocked thread holding three monitors, followed by its ownable synchronizers section.
pub const LOCKED_THREAD: &str = "\"default task-23\" #349 prio=5 os_prio=0 tid=0x00007f8fe400c800 nid=0x72fa waiting for monitor entry [0x00007f8f7228e000]\n\
\tjava.lang.Thread.State: BLOCKED (on object monitor)\n\
\t at java.security.Provider.getService(Provider.java:1039)\n\
\t - locked <0x0000000682e5f948> (a sun.security.provider.Sun)\n\
\t at sun.security.jca.ProviderList.getService(ProviderList.java:332)\n\
\t at sun.security.jca.GetInstance.getInstance(GetInstance.java:157)\n\
\t at java.security.Security.getImpl(Security.java:695)\n\
\t at java.security.MessageDigest.getInstance(MessageDigest.java:167)\n\
\t at sun.security.rsa.RSASignature.<init>(RSASignature.java:79)\n\
\t at java.security.Signature$Delegate.chooseProvider(Signature.java:1114)\n\
\t - locked <0x00000007bc531138> (a java.lang.Object)\n\
\t at java.security.Signature$Delegate.engineInitSign(Signature.java:1188)\n\
\t at java.security.Signature.initSign(Signature.java:553)\n\
\t at sun.security.ssl.Handshaker$DelegatedTask.run(Handshaker.java:1467)\n\
\t - locked <0x00000007bbbac500> (a sun.security.ssl.SSLEngineImpl)\n\
\t at io.undertow.protocols.ssl.SslConduit$5.run(SslConduit.java:1021)\n\
\t at java.util.concurrent.ThreadPoolExecutor.runWorker(ThreadPoolExecutor.java:1149)\n\
\t at java.util.concurrent.ThreadPoolExecutor$Worker.run(ThreadPoolExecutor.java:624)\n\
\t at java.lang.Thread.run(Thread.java:748)\n\
 \n\
\tLocked ownable synchronizers:\n\
\t - <0x00000006a43d5c08> (a java.util.concurrent.ThreadPoolExecutor$Worker)";

/// Threads without a Java stack, printed back to back as HotSpot does for VM internals.
pub const TOGETHER_THREADS: &str = "\"VM Thread\" os_prio=0 cpu=12.31ms elapsed=741.87s tid=0x00007f195c299000 nid=0xb07e runnable  \n\
\"GC Thread#0\" os_prio=0 cpu=4.10ms elapsed=741.88s tid=0x00007f195c04a800 nid=0xb077 runnable  \n\
\"GC Thread#1\" os_prio=0 cpu=3.92ms elapsed=741.60s tid=0x00007f1914001000 nid=0xb08b runnable  \n\
\"G1 Main Marker\" os_prio=0 cpu=0.41ms elapsed=741.88s tid=0x00007f195c08c000 nid=0xb07a runnable  \n\
\"G1 Conc#0\" os_prio=0 cpu=0.03ms elapsed=741.88s tid=0x00007f195c08d800 nid=0xb07b runnable  \n\
\"VM Periodic Task Thread\" os_prio=0 cpu=301.50ms elapsed=741.81s tid=0x00007f195c30f000 nid=0xb087 waiting on condition  \n\
\n\
JNI global refs: 15, weak refs: 0\n";

/// Three waiting threads; two share the same top frame.
pub const WAITING_THREADS: &str = "\"Finalizer\" #3 daemon prio=8 os_prio=0 tid=0x00007f74bc1ab000 nid=0xd9b8 in Object.wait() [0x00007f74a6e7c000]\n\
   java.lang.Thread.State: WAITING (on object monitor)\n\
\tat java.lang.Object.wait(Native Method)\n\
\t- waiting on <0x00000000c0008ee0> (a java.lang.ref.ReferenceQueue$Lock)\n\
\tat java.lang.ref.ReferenceQueue.remove(ReferenceQueue.java:143)\n\
\t- locked <0x00000000c0008ee0> (a java.lang.ref.ReferenceQueue$Lock)\n\
\tat java.lang.ref.Finalizer$FinalizerThread.run(Finalizer.java:209)\n\
\n\
\"Reference Handler\" #2 daemon prio=10 os_prio=0 tid=0x00007f74bc1a6800 nid=0xd9b7 in Object.wait() [0x00007f74a6f7d000]\n\
   java.lang.Thread.State: WAITING (on object monitor)\n\
\tat java.lang.Object.wait(Native Method)\n\
\t- waiting on <0x00000000c0008f48> (a java.lang.ref.Reference$Lock)\n\
\tat java.lang.Object.wait(Object.java:502)\n\
\tat java.lang.ref.Reference.tryHandlePending(Reference.java:191)\n\
\t- locked <0x00000000c0008f48> (a java.lang.ref.Reference$Lock)\n\
\n\
\"pool-1-thread-1\" #12 prio=5 os_prio=0 tid=0x00007f74bc2e9000 nid=0xd9cb waiting on condition [0x00007f74a5d1e000]\n\
   java.lang.Thread.State: WAITING (parking)\n\
\tat sun.misc.Unsafe.park(Native Method)\n\
\t- parking to wait for  <0x00000000c01ec3b8> (a java.util.concurrent.locks.AbstractQueuedSynchronizer$ConditionObject)\n\
\tat java.util.concurrent.locks.LockSupport.park(LockSupport.java:175)\n\
\n\
\"VM Thread\" os_prio=0 tid=0x00007f74bc1a1000 nid=0xd9b6 runnable \n\
\n";

/// Splits fixture text into lines the way [`crate::DumpSource::lines`] does.
pub fn lines_of(text: &str) -> Vec<&str> {
    crate::DumpSource::lines(text)
}
